//! Projectile launched from a ledge: a fixed-step driver over the closed-form
//! trajectory, with landing measurements and a fall-height safety check.

pub mod config;
pub mod core;
pub mod error;
pub mod headless;
pub mod logging;
pub mod plot;
pub mod sweep;

pub use crate::config::SimulationConfig;
pub use crate::core::driver::{DriverConfig, SimulationDriver, TickOutcome};
pub use crate::core::frame_loop::{FrameLoop, Renderer, ResultsSink};
pub use crate::core::model::{
    BodyTone, FlightResult, Frame, InitialVelocity, LaunchParameters, PositionSample,
    SafetyAssessment, SimulationState, SimulationStatus,
};
pub use crate::error::{Result, SimError};
pub use crate::headless::{RunReport, simulate};
