//! Fixed-horizon simulation driver for hybrid systems.

use crate::{
    Float,
    error::Error,
    event::{self, Event},
    ode::ODE,
    rk4,
    settings::Settings,
    status::Status,
    trajectory::Trajectory,
};

/// Integrate `model` from `y0` over `settings.nsteps` samples.
///
/// Every iteration applies the pre-step reset check against the stored
/// sample, takes one nominal RK4 step, and refines the step size by bisection
/// if the candidate overshoots the threshold band. The elapsed time recorded
/// for a refined step is the actual halved size, not the nominal one.
///
/// The loop is strictly sequential; sample `t+1` is computed from sample `t`
/// alone. The trajectory buffers are allocated in full before the first step
/// and ownership moves to the caller on return.
///
/// # Errors
///
/// Returns [`Error::InvalidStepSize`] when `settings.h` is not positive and
/// finite, and [`Error::InvalidStepCount`] when `settings.nsteps` is zero.
///
/// # Panics
///
/// A mismatch between `y0.len()` and `model.dim()` is a contract violation
/// and aborts with a diagnostic rather than being coerced or reported.
pub fn simulate<M>(model: &M, y0: &[Float], settings: &Settings) -> Result<Trajectory, Error>
where
    M: ODE + Event,
{
    // --- Input Validation ---

    if settings.h <= 0.0 || !settings.h.is_finite() {
        return Err(Error::InvalidStepSize(settings.h));
    }
    if settings.nsteps == 0 {
        return Err(Error::InvalidStepCount(settings.nsteps));
    }

    assert_eq!(
        y0.len(),
        model.dim(),
        "initial state dimension {} does not match the vector field dimension {}",
        y0.len(),
        model.dim(),
    );

    // --- Declarations ---
    let n = y0.len();
    let nsteps = settings.nsteps;
    let band = settings.threshold + settings.precision;

    let mut t = vec![0.0; nsteps];
    let mut y = vec![vec![0.0; n]; nsteps];
    y[0].copy_from_slice(y0);

    let mut ws = rk4::Workspace::new(n);
    let mut ystart = vec![0.0; n];
    let mut ynext = vec![0.0; n];
    let mut nfev = 0;
    let mut nreset = 0;
    let mut nevent = 0;
    let mut nunresolved = 0;

    // --- Main integration loop ---
    for step in 0..nsteps - 1 {
        // Pre-step reset check, re-evaluated from the stored sample on every
        // iteration. The stored sample itself is left as recorded.
        ystart.copy_from_slice(&y[step]);
        if model.observe(&ystart) > settings.threshold {
            model.apply_reset(&mut ystart);
            nreset += 1;
        }

        // Nominal step
        rk4::step(model, t[step], &ystart, settings.h, &mut ws, &mut ynext);
        nfev += 4;

        // Event localization on overshoot
        let mut h_used = settings.h;
        if model.observe(&ynext) > band {
            let refinement = event::localize(model, t[step], &ystart, settings, &mut ws, &mut ynext);
            nfev += 4 * refinement.halvings;
            h_used = refinement.h;
            nevent += 1;
            if !refinement.converged {
                nunresolved += 1;
            }
        }

        t[step + 1] = t[step] + h_used;
        y[step + 1].copy_from_slice(&ynext);
    }

    let status = if nunresolved == 0 {
        Status::Success
    } else {
        Status::PrecisionNotMet
    };

    Ok(Trajectory {
        t,
        y,
        h: settings.h,
        nfev,
        nstep: nsteps - 1,
        nreset,
        nevent,
        nunresolved,
        status,
    })
}
