//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use hivp::{Event, Float, Izhikevich, ODE, Settings};

/// Reference cell used throughout the tests: quiet input current and the
/// canonical constants.
pub fn reference_cell() -> Izhikevich {
    Izhikevich::builder()
        .i(0.0)
        .a(0.02)
        .b(2.0)
        .c(-30.0)
        .d(4.0)
        .build()
}

/// Default settings with the given trajectory length.
pub fn settings(nsteps: usize) -> Settings {
    Settings::builder().nsteps(nsteps).build()
}

/// Linear field with a neutrally stable center at the origin. Orbits stay
/// bounded, so with the threshold pushed out of reach nothing ever fires.
pub struct Center;

impl ODE for Center {
    fn dim(&self) -> usize {
        2
    }

    fn ode(&self, _x: Float, y: &[Float], dydx: &mut [Float]) {
        dydx[0] = 2.0 * y[0] - 3.0 * y[1];
        dydx[1] = 2.0 * y[0] - 2.0 * y[1];
    }
}

impl Event for Center {
    fn observe(&self, y: &[Float]) -> Float {
        y[0]
    }

    fn apply_reset(&self, y: &mut [Float]) {
        y[0] = 0.0;
    }
}

/// Constant-rate climb of the first component. One RK4 step from `v` lands
/// exactly at `v + h * rate`, which makes overshoot sizes easy to dial in.
pub struct Ramp {
    pub rate: Float,
}

impl ODE for Ramp {
    fn dim(&self) -> usize {
        2
    }

    fn ode(&self, _x: Float, _y: &[Float], dydx: &mut [Float]) {
        dydx[0] = self.rate;
        dydx[1] = 0.0;
    }
}

impl Event for Ramp {
    fn observe(&self, y: &[Float]) -> Float {
        y[0]
    }

    fn apply_reset(&self, y: &mut [Float]) {
        y[0] = 0.0;
    }
}
