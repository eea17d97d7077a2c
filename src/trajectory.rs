//! The sampled result of a completed simulation run.

use crate::{Float, status::Status};

/// Time series produced by [`crate::simulate`]: one sample per configured
/// step, stored as parallel `t`/`y` vectors, plus run statistics.
///
/// The length is fixed at construction: `t.len() == y.len() == nsteps`,
/// `t[0] == 0`, `y[0]` is the supplied initial condition, and `t` is strictly
/// increasing.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Sample abscissas.
    pub t: Vec<Float>,
    /// Sample states, one vector per abscissa.
    pub y: Vec<Vec<Float>>,
    /// Nominal step size the run was configured with.
    pub h: Float,
    /// Number of right-hand-side evaluations.
    pub nfev: usize,
    /// Number of accepted steps (`nsteps - 1`).
    pub nstep: usize,
    /// Number of pre-step resets applied.
    pub nreset: usize,
    /// Number of steps that entered event localization.
    pub nevent: usize,
    /// Number of localizations that exhausted the halving budget while still
    /// above the threshold band. The candidates were accepted regardless.
    pub nunresolved: usize,
    pub status: Status,
}

impl Trajectory {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final sample, as a `(t, y)` pair.
    pub fn last(&self) -> Option<(Float, &[Float])> {
        match (self.t.last(), self.y.last()) {
            (Some(&t), Some(y)) => Some((t, y.as_slice())),
            _ => None,
        }
    }

    /// Iterate over `(t, y)` samples in order.
    pub fn iter(&self) -> impl Iterator<Item = (Float, &[Float])> + '_ {
        self.t
            .iter()
            .copied()
            .zip(self.y.iter().map(|y| y.as_slice()))
    }
}
