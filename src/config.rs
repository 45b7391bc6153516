//! Tunable settings, loadable from YAML. Every field has a default, so a file only
//! needs the values it changes:
//!
//! ```yaml
//! time_step_s: 0.016
//! body_radius_m: 0.2
//! out_of_bounds_margin_radii: 5.0
//! critical_fall_height_m: 7.0
//! viewport:
//!   width_px: 800
//!   pixels_per_metre: 30
//! launch:
//!   height_m: 2.0
//!   speed_mps: 5.0
//!   angle_deg: 30
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::core::constants::{
    BODY_RADIUS_M, CRITICAL_FALL_HEIGHT_M, DEFAULT_TICK_LIMIT, OUT_OF_BOUNDS_MARGIN_RADII,
    SIM_TIME_STEP_S,
};
use crate::core::driver::DriverConfig;
use crate::core::model::LaunchParameters;
use crate::core::window::Viewport;
use crate::error::{Result, SimError};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub time_step_s: f64,
    pub body_radius_m: f64,
    pub out_of_bounds_margin_radii: f64, // measured in body radii past either visible edge
    pub critical_fall_height_m: f64,
    pub tick_limit: u64, // headless runs only
    pub viewport: Viewport,
    pub launch: LaunchParameters, // defaults restored on reset
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step_s: SIM_TIME_STEP_S,
            body_radius_m: BODY_RADIUS_M,
            out_of_bounds_margin_radii: OUT_OF_BOUNDS_MARGIN_RADII,
            critical_fall_height_m: CRITICAL_FALL_HEIGHT_M,
            tick_limit: DEFAULT_TICK_LIMIT,
            viewport: Viewport::default(),
            launch: LaunchParameters::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_reader(BufReader::new(file))?;
        log::debug!("loaded config from {}", path.display());
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if !(self.time_step_s.is_finite() && self.time_step_s > 0.0) {
            return Err(invalid(format!(
                "time_step_s must be positive, got {}",
                self.time_step_s
            )));
        }
        if !(self.body_radius_m.is_finite() && self.body_radius_m >= 0.0) {
            return Err(invalid(format!(
                "body_radius_m cannot be negative, got {}",
                self.body_radius_m
            )));
        }
        if !(self.out_of_bounds_margin_radii.is_finite() && self.out_of_bounds_margin_radii >= 0.0)
        {
            return Err(invalid(format!(
                "out_of_bounds_margin_radii cannot be negative, got {}",
                self.out_of_bounds_margin_radii
            )));
        }
        if !self.critical_fall_height_m.is_finite() {
            return Err(invalid("critical_fall_height_m must be finite".to_string()));
        }
        if self.tick_limit == 0 {
            return Err(invalid("tick_limit must be at least 1".to_string()));
        }

        let v = &self.viewport;
        let sizes = [
            ("viewport.width_px", v.width_px),
            ("viewport.height_px", v.height_px),
            ("viewport.pixels_per_metre", v.pixels_per_metre),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if v.launch_x_px() > v.width_px || v.ground_height_px >= v.height_px {
            return Err(invalid(
                "ledge and ground must fit inside the viewport".to_string(),
            ));
        }

        if !self.launch.is_finite() {
            return Err(invalid("launch defaults must be finite".to_string()));
        }

        Ok(self)
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            time_step_s: self.time_step_s,
            body_radius_m: self.body_radius_m,
            out_of_bounds_margin_radii: self.out_of_bounds_margin_radii,
            critical_fall_height_m: self.critical_fall_height_m,
            visible_range: self.viewport.visible_range(),
        }
    }
}

fn invalid(message: String) -> SimError {
    SimError::InvalidConfig(message)
}
