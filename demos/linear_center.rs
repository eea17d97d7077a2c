//! A custom vector field run through the same driver: a neutrally stable
//! linear center, integrated with the threshold pushed out of reach so the
//! run reduces to plain fixed-step RK4.

use hivp::prelude::*;

/// dv/dt = 2v - 3u, du/dt = 2v - 2u. Trace zero, determinant positive, so
/// orbits are closed curves around the origin.
struct Center;

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

fn main() {
    // Period of the orbit is 2*pi / sqrt(2); run a whole number of periods so
    // the end state should come back to the start.
    let period = 2.0 * std::f64::consts::PI / (2.0 as Float).sqrt();
    let h = 1e-3;
    let nsteps = (period / h) as usize + 1;

    let settings = Settings::builder()
        .h(h)
        .nsteps(nsteps)
        .threshold(Float::INFINITY)
        .build();

    match simulate(&Center, &[1.0, 0.0], &settings) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Number of samples: {}", sol.len());
            if let Some((t, y)) = sol.last() {
                let drift = ((y[0] - 1.0).powi(2) + y[1].powi(2)).sqrt();
                println!("t = {:.4}, v = {:.6}, u = {:.6}", t, y[0], y[1]);
                println!("Distance from the initial state after one period: {:.2e}", drift);
            }
        }
        Err(err) => eprintln!("Integration failed: {}", err),
    }
}
