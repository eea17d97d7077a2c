//! Flat CSV dump of a completed trajectory.
//!
//! Presentation glue, not core behavior: one header row, one row per sample
//! with the model and run configuration repeated per row so each line is
//! self-describing.

use std::path::Path;

use anyhow::Context;

use crate::{Float, model::Izhikevich, settings::Settings, trajectory::Trajectory};

/// Render `trajectory` as CSV at `path`.
///
/// Columns: `t`, `v`, `u`, then `i,a,b,c,d` from the model and `h,nsteps,dim`
/// from the run configuration. NaN cells are written literally as `NaN`.
pub fn write_trajectory_csv(
    path: impl AsRef<Path>,
    trajectory: &Trajectory,
    model: &Izhikevich,
    settings: &Settings,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output CSV (path={:?})", path))?;

    wtr.write_record([
        "t", "v", "u", "i", "a", "b", "c", "d", "h", "nsteps", "dim",
    ])?;

    let dim = trajectory.y.first().map_or(0, Vec::len);
    for (t, y) in trajectory.iter() {
        let mut record = Vec::with_capacity(dim + 9);
        record.push(cell(t));
        for &v in y {
            record.push(cell(v));
        }
        record.push(cell(model.i));
        record.push(cell(model.a));
        record.push(cell(model.b));
        record.push(cell(model.c));
        record.push(cell(model.d));
        record.push(cell(settings.h));
        record.push(settings.nsteps.to_string());
        record.push(dim.to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()
        .with_context(|| format!("failed to flush output CSV (path={:?})", path))?;
    Ok(())
}

fn cell(v: Float) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", v)
    }
}
