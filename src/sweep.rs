use rayon::prelude::*;

use crate::core::driver::DriverConfig;
use crate::core::model::LaunchParameters;
use crate::error::{Result, SimError};
use crate::headless::{RunReport, simulate};

#[derive(Debug)]
pub struct SweepRow {
    pub angle_deg: f64,
    pub report: Result<RunReport>,
}

pub fn angle_range(from_deg: f64, to_deg: f64, step_deg: f64) -> Result<Vec<f64>> {
    if !(from_deg.is_finite() && to_deg.is_finite() && step_deg.is_finite()) {
        return Err(SimError::InvalidSweep("angles must be finite".to_string()));
    }
    if step_deg <= 0.0 {
        return Err(SimError::InvalidSweep(format!(
            "step must be positive, got {step_deg}"
        )));
    }
    if to_deg < from_deg {
        return Err(SimError::InvalidSweep(format!(
            "end angle {to_deg} is below start angle {from_deg}"
        )));
    }

    // Small tolerance so that e.g. 0..=90 step 0.1 still includes 90.
    let count = ((to_deg - from_deg) / step_deg + 1e-9).floor() as usize;
    Ok((0..=count).map(|i| from_deg + i as f64 * step_deg).collect())
}

/// One independent run per angle, in parallel. Output order follows `angles`.
pub fn sweep_angles(
    base: LaunchParameters,
    angles: &[f64],
    config: &DriverConfig,
    tick_limit: u64,
) -> Vec<SweepRow> {
    log::debug!("sweeping {} angles", angles.len());
    angles
        .par_iter()
        .map(|&angle_deg| SweepRow {
            angle_deg,
            report: simulate(base.with_angle(angle_deg), config, tick_limit),
        })
        .collect()
}

/// Landed run with the greatest range.
pub fn best_range(rows: &[SweepRow]) -> Option<&SweepRow> {
    rows.iter()
        .filter_map(|row| {
            let report = row.report.as_ref().ok()?;
            let result = report.result.as_ref()?;
            Some((row, result.range_m))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(row, _)| row)
}
