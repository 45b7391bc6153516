use serde::Deserialize;

use crate::core::constants::{
    DEFAULT_LAUNCH_ANGLE_DEG, DEFAULT_LAUNCH_HEIGHT_M, DEFAULT_LAUNCH_SPEED_MPS,
};

/// Launch conditions for one run. Angles above zero point upwards.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    pub height_m: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
}

impl LaunchParameters {
    pub fn new(height_m: f64, speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            height_m,
            speed_mps,
            angle_deg,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.height_m.is_finite() && self.speed_mps.is_finite() && self.angle_deg.is_finite()
    }

    pub fn with_angle(self, angle_deg: f64) -> Self {
        Self { angle_deg, ..self }
    }
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_LAUNCH_HEIGHT_M,
            DEFAULT_LAUNCH_SPEED_MPS,
            DEFAULT_LAUNCH_ANGLE_DEG,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialVelocity {
    pub vx0_mps: f64,
    pub vy0_mps: f64,
}

/// Body centre relative to the launch point horizontally and to the ground vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSample {
    pub x_m: f64,
    pub height_m: f64,
}

impl PositionSample {
    pub fn launch_point(params: LaunchParameters) -> Self {
        Self {
            x_m: 0.0,
            height_m: params.height_m,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
    Running,
    LandedOnGround,
    ExitedBounds,
}

impl SimulationStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::LandedOnGround => "landed on ground",
            Self::ExitedBounds => "exited bounds",
        }
    }
}

/// Evolving state of a single run. Only the driver mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    elapsed_s: f64,
    ticks: u64,
    path: Vec<PositionSample>,
    status: SimulationStatus,
}

impl SimulationState {
    pub(crate) fn new() -> Self {
        Self {
            elapsed_s: 0.0,
            ticks: 0,
            path: Vec::new(),
            status: SimulationStatus::Running,
        }
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn path(&self) -> &[PositionSample] {
        &self.path
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn last_sample(&self) -> Option<PositionSample> {
        self.path.last().copied()
    }

    pub(crate) fn record(&mut self, elapsed_s: f64, sample: PositionSample) {
        debug_assert!(!self.status.is_terminal());
        self.elapsed_s = elapsed_s;
        self.ticks += 1;
        self.path.push(sample);
    }

    pub(crate) fn finish(&mut self, status: SimulationStatus) {
        self.status = status;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SafetyAssessment {
    pub is_adverse: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightResult {
    pub range_m: f64,
    pub peak_height_m: f64,
    pub time_of_flight_s: f64,
    pub safety: SafetyAssessment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyTone {
    Normal,
    Danger,
}

/// What a renderer gets to see after start, reset and every tick.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub launch_height_m: f64,
    pub path: &'a [PositionSample],
    pub body: PositionSample,
    pub tone: BodyTone,
}
