//! Settings for the simulation driver.

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug)]
/// Settings for one simulation run.
///
/// Defaults match the Izhikevich reference configuration; only the trajectory
/// length has no sensible default and must be supplied.
pub struct Settings {
    /// Nominal step size. Event localization may use smaller sizes for
    /// individual steps, never larger ones.
    #[builder(default = 1e-3)]
    pub h: Float,
    /// Number of samples in the produced trajectory, initial condition
    /// included.
    pub nsteps: usize,
    /// Threshold the guard observation is compared against.
    #[builder(default = 30.0)]
    pub threshold: Float,
    /// Accepted overshoot above the threshold. A candidate step is kept once
    /// the observed component is at or below `threshold + precision`.
    #[builder(default = 1e-5)]
    pub precision: Float,
    /// Maximum number of step halvings while localizing a single event.
    /// Once exhausted, the last candidate is accepted even if still out of
    /// band.
    #[builder(default = 100)]
    pub max_halvings: usize,
}
