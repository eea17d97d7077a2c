//! Izhikevich spiking-neuron model.
//!
//! Quadratic membrane dynamics with a discrete after-spike reset:
//!
//! ```text
//! dv/dt = 0.04 v^2 + 5 v + 140 - u + I
//! du/dt = a (b v - u)
//! if v > threshold: v -> c, u -> u + d
//! ```
//!
//! The system is autonomous; the abscissa only participates in the NaN
//! contract check.

use bon::Builder;

use crate::{Float, event::Event, ode::ODE};

#[derive(Builder, Clone, Debug)]
/// Parameters of the two-dimensional Izhikevich neuron. Immutable for a run.
pub struct Izhikevich {
    /// Injected current I.
    #[builder(default = 0.0)]
    pub i: Float,
    /// Recovery time scale.
    #[builder(default = 0.02)]
    pub a: Float,
    /// Recovery sensitivity to the membrane potential.
    #[builder(default = 2.0)]
    pub b: Float,
    /// After-spike membrane reset value.
    #[builder(default = -30.0)]
    pub c: Float,
    /// After-spike recovery increment.
    #[builder(default = 4.0)]
    pub d: Float,
}

impl ODE for Izhikevich {
    fn dim(&self) -> usize {
        2
    }

    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) {
        assert!(!x.is_nan(), "abscissa passed to the vector field is NaN");
        dydx[0] = 0.04 * y[0] * y[0] + 5.0 * y[0] + 140.0 - y[1] + self.i;
        dydx[1] = self.a * (self.b * y[0] - y[1]);
    }
}

impl Event for Izhikevich {
    fn observe(&self, y: &[Float]) -> Float {
        y[0]
    }

    fn apply_reset(&self, y: &mut [Float]) {
        y[0] = self.c;
        y[1] += self.d;
    }
}
