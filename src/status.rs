//! Status codes for completed runs.

/// Outcome reported on a completed [`crate::Trajectory`].
///
/// `PrecisionNotMet` flags that at least one event localization exhausted its
/// halving budget while the monitored component was still above the threshold
/// band. The run still completes with the last candidate in that case; the
/// samples are identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    PrecisionNotMet,
}
