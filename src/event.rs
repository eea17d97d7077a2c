//! Threshold events: guard observation, reset map, and step refinement.

use crate::{Float, ode::ODE, rk4, settings::Settings};

/// Discrete half of a hybrid system.
///
/// The driver monitors `observe` against the configured threshold and applies
/// `apply_reset` once the stored state has crossed it. Implement this
/// alongside [`ODE`] on the same model type; the reset must drive the
/// observed component back below the threshold, otherwise it fires again on
/// every following iteration.
pub trait Event {
    /// Scalar compared against the threshold, typically one state component.
    fn observe(&self, y: &[Float]) -> Float;

    /// In-place discrete jump applied to a state whose observed value has
    /// crossed the threshold.
    fn apply_reset(&self, y: &mut [Float]);
}

/// Outcome of one bisection refinement.
pub(crate) struct Refinement {
    /// Step size of the accepted candidate.
    pub h: Float,
    /// Number of halvings performed (each one costs a full kernel step).
    pub halvings: usize,
    /// False when the halving budget ran out with the candidate still above
    /// the threshold band. The candidate is accepted regardless.
    pub converged: bool,
}

/// Shrink the step taken from `y` at abscissa `x` until the observed
/// component of the candidate falls back inside the threshold band, or the
/// halving cap is reached.
///
/// Each halving re-integrates from the same pre-step state; no interpolation
/// across the crossing is performed, so the crossing-time accuracy is bounded
/// by `settings.precision` and by the cap. `ynext` is overwritten on every
/// halving and holds the accepted candidate on return.
pub(crate) fn localize<M>(
    model: &M,
    x: Float,
    y: &[Float],
    settings: &Settings,
    ws: &mut rk4::Workspace,
    ynext: &mut [Float],
) -> Refinement
where
    M: ODE + Event,
{
    let band = settings.threshold + settings.precision;
    let mut h = settings.h;
    let mut halvings = 0;

    while halvings < settings.max_halvings {
        h /= 2.0;
        halvings += 1;
        rk4::step(model, x, y, h, ws, ynext);
        if model.observe(ynext) <= band {
            return Refinement {
                h,
                halvings,
                converged: true,
            };
        }
    }

    Refinement {
        h,
        halvings,
        converged: false,
    }
}
