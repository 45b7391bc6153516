use crate::core::constants::EARTH_GRAVITY_MPS2;
use crate::core::model::{InitialVelocity, LaunchParameters, PositionSample};

pub fn initial_velocity(params: LaunchParameters) -> InitialVelocity {
    let theta = params.angle_deg.to_radians();
    InitialVelocity {
        vx0_mps: params.speed_mps * theta.cos(),
        vy0_mps: params.speed_mps * theta.sin(),
    }
}

/// Closed-form position at `time_s`; nothing is integrated.
pub fn position_at(params: LaunchParameters, time_s: f64) -> PositionSample {
    let v0 = initial_velocity(params);
    PositionSample {
        x_m: v0.vx0_mps * time_s,
        height_m: params.height_m + (v0.vy0_mps * time_s)
            - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s),
    }
}

pub fn velocity_at(params: LaunchParameters, time_s: f64) -> (f64, f64) {
    let v0 = initial_velocity(params);
    (v0.vx0_mps, v0.vy0_mps - EARTH_GRAVITY_MPS2 * time_s)
}

/// Time at which the vertical velocity crosses zero, or zero when launched level or down.
pub fn apex_time(params: LaunchParameters) -> f64 {
    (initial_velocity(params).vy0_mps / EARTH_GRAVITY_MPS2).max(0.0)
}

/// Vertex of the parabola. Only used to cross-check the re-sampled peak.
pub fn peak_height(params: LaunchParameters) -> f64 {
    let vy0 = initial_velocity(params).vy0_mps;
    if vy0 <= 0.0 {
        params.height_m
    } else {
        params.height_m + (vy0 * vy0) / (2.0 * EARTH_GRAVITY_MPS2)
    }
}

/// Peak height seen at every multiple of `step_s` from launch up to `ticks` steps,
/// clamped to the ground.
pub fn resampled_peak_height(params: LaunchParameters, step_s: f64, ticks: u64) -> f64 {
    (0..=ticks)
        .map(|i| position_at(params, i as f64 * step_s).height_m)
        .fold(params.height_m, f64::max)
        .max(0.0)
}

/// Exact time at which the centre height falls to `contact_height_m` on the way down.
pub fn contact_time(params: LaunchParameters, contact_height_m: f64) -> Option<f64> {
    let vy0 = initial_velocity(params).vy0_mps;
    let disc = vy0 * vy0 + 2.0 * EARTH_GRAVITY_MPS2 * (params.height_m - contact_height_m);
    if disc < 0.0 {
        return None;
    }

    let t_contact = (vy0 + disc.sqrt()) / EARTH_GRAVITY_MPS2;
    (t_contact >= 0.0).then_some(t_contact)
}

pub fn sample_trajectory(
    params: LaunchParameters,
    duration_s: f64,
    samples: usize,
) -> Vec<PositionSample> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * duration_s) / sample_count as f64;
            position_at(params, t)
        })
        .collect()
}
