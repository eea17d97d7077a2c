//! Classic explicit Runge-Kutta 4 (RK4) fixed-step kernel.

use crate::{Float, ode::ODE};

/// Scratch buffers for the four stage derivatives and the intermediate state.
///
/// Allocated once per run and reused for every step, including the repeated
/// kernel calls made while localizing an event.
pub struct Workspace {
    k1: Vec<Float>,
    k2: Vec<Float>,
    k3: Vec<Float>,
    k4: Vec<Float>,
    yt: Vec<Float>,
}

impl Workspace {
    pub fn new(n: usize) -> Self {
        Self {
            k1: vec![0.0; n],
            k2: vec![0.0; n],
            k3: vec![0.0; n],
            k4: vec![0.0; n],
            yt: vec![0.0; n],
        }
    }
}

/// Advance `y` at abscissa `x` by a single step of size `h`, writing the
/// result to `ynext`.
///
/// `h` may be smaller than the nominal configured step size; the event
/// locator relies on this to re-integrate the same step at halved sizes. The
/// input state is left untouched, and the kernel knows nothing about
/// thresholds or resets. Costs exactly four evaluations of `f`.
pub fn step<F>(f: &F, x: Float, y: &[Float], h: Float, ws: &mut Workspace, ynext: &mut [Float])
where
    F: ODE,
{
    let n = y.len();

    // Stage computations
    f.ode(x, y, &mut ws.k1);

    for i in 0..n {
        ws.yt[i] = y[i] + h * A21 * ws.k1[i];
    }
    f.ode(x + C2 * h, &ws.yt, &mut ws.k2);

    for i in 0..n {
        ws.yt[i] = y[i] + h * A32 * ws.k2[i];
    }
    f.ode(x + C3 * h, &ws.yt, &mut ws.k3);

    for i in 0..n {
        ws.yt[i] = y[i] + h * A43 * ws.k3[i];
    }
    f.ode(x + C4 * h, &ws.yt, &mut ws.k4);

    // Combination step
    for i in 0..n {
        ynext[i] = y[i] + h * (B1 * ws.k1[i] + B2 * ws.k2[i] + B3 * ws.k3[i] + B4 * ws.k4[i]);
    }
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
