use crate::core::constants::{
    BODY_RADIUS_M, CRITICAL_FALL_HEIGHT_M, OUT_OF_BOUNDS_MARGIN_RADII, SIM_TIME_STEP_S,
};
use crate::core::model::{
    BodyTone, FlightResult, Frame, LaunchParameters, PositionSample, SimulationState,
    SimulationStatus,
};
use crate::core::safety::assess;
use crate::core::trajectory::{initial_velocity, position_at, resampled_peak_height};
use crate::core::window::{HorizontalBounds, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverConfig {
    pub time_step_s: f64,
    pub body_radius_m: f64,
    pub out_of_bounds_margin_radii: f64,
    pub critical_fall_height_m: f64,
    pub visible_range: HorizontalBounds,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            time_step_s: SIM_TIME_STEP_S,
            body_radius_m: BODY_RADIUS_M,
            out_of_bounds_margin_radii: OUT_OF_BOUNDS_MARGIN_RADII,
            critical_fall_height_m: CRITICAL_FALL_HEIGHT_M,
            visible_range: Viewport::default().visible_range(),
        }
    }
}

impl DriverConfig {
    pub fn out_of_bounds_margin_m(&self) -> f64 {
        self.out_of_bounds_margin_radii * self.body_radius_m
    }

    fn touches_ground(&self, sample: PositionSample) -> bool {
        sample.height_m - self.body_radius_m <= 0.0
    }

    fn out_of_bounds(&self, sample: PositionSample) -> bool {
        !self
            .visible_range
            .contains_with_margin(sample.x_m, self.out_of_bounds_margin_m())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// No run in progress; nothing changed.
    Idle,
    Advanced,
    Landed(FlightResult),
    ExitedBounds,
}

impl TickOutcome {
    pub fn keeps_running(&self) -> bool {
        matches!(self, Self::Advanced)
    }
}

#[derive(Clone, Debug)]
struct Run {
    params: LaunchParameters,
    config: DriverConfig,
    state: SimulationState,
    result: Option<FlightResult>,
}

impl Run {
    fn measure(&self) -> FlightResult {
        let time_of_flight_s = self.state.elapsed_s();
        let peak_height_m = resampled_peak_height(
            self.params,
            self.config.time_step_s,
            self.state.ticks(),
        );
        FlightResult {
            range_m: initial_velocity(self.params).vx0_mps * time_of_flight_s,
            peak_height_m,
            time_of_flight_s,
            safety: assess(peak_height_m, self.config.critical_fall_height_m),
        }
    }
}

/// Owns one simulation run at a time and advances it a fixed step per tick.
#[derive(Clone, Debug)]
pub struct SimulationDriver {
    config: DriverConfig,
    rest_params: LaunchParameters,
    run: Option<Run>,
}

impl SimulationDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            rest_params: LaunchParameters::default(),
            run: None,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Takes effect from the next `start`; a run in progress keeps its own copy.
    pub fn set_visible_range(&mut self, visible_range: HorizontalBounds) {
        self.config.visible_range = visible_range;
    }

    pub fn start(&mut self, params: LaunchParameters) {
        log::debug!(
            "run started: height={:.2} m speed={:.2} m/s angle={:.1} deg",
            params.height_m,
            params.speed_mps,
            params.angle_deg
        );
        self.rest_params = params;
        self.run = Some(Run {
            params,
            config: self.config,
            state: SimulationState::new(),
            result: None,
        });
    }

    pub fn reset(&mut self, params: LaunchParameters) {
        if self.run.take().is_some() {
            log::debug!("run discarded");
        }
        self.rest_params = params;
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };
        if run.state.status().is_terminal() {
            return TickOutcome::Idle;
        }

        let elapsed_s = run.state.elapsed_s() + run.config.time_step_s;
        let sample = position_at(run.params, elapsed_s);
        run.state.record(elapsed_s, sample);
        log::trace!(
            "t={elapsed_s:.3}s x={:.3} m h={:.3} m",
            sample.x_m,
            sample.height_m
        );

        if run.config.touches_ground(sample) {
            run.state.finish(SimulationStatus::LandedOnGround);
            let result = run.measure();
            log::info!(
                "landed after {:.3} s: range {:.2} m, peak {:.2} m",
                result.time_of_flight_s,
                result.range_m,
                result.peak_height_m
            );
            run.result = Some(result.clone());
            return TickOutcome::Landed(result);
        }

        if run.config.out_of_bounds(sample) {
            run.state.finish(SimulationStatus::ExitedBounds);
            log::info!("left the visible area at x={:.2} m", sample.x_m);
            return TickOutcome::ExitedBounds;
        }

        TickOutcome::Advanced
    }

    pub fn params(&self) -> LaunchParameters {
        self.run.as_ref().map_or(self.rest_params, |run| run.params)
    }

    pub fn state(&self) -> Option<&SimulationState> {
        self.run.as_ref().map(|run| &run.state)
    }

    pub fn status(&self) -> Option<SimulationStatus> {
        self.state().map(SimulationState::status)
    }

    pub fn result(&self) -> Option<&FlightResult> {
        self.run.as_ref().and_then(|run| run.result.as_ref())
    }

    pub fn is_running(&self) -> bool {
        self.status() == Some(SimulationStatus::Running)
    }

    pub fn frame(&self) -> Frame<'_> {
        let params = self.params();
        let path = self.state().map_or(&[][..], SimulationState::path);
        let tone = match self.result() {
            Some(result) if result.safety.is_adverse => BodyTone::Danger,
            _ => BodyTone::Normal,
        };
        Frame {
            launch_height_m: params.height_m,
            path,
            body: path
                .last()
                .copied()
                .unwrap_or_else(|| PositionSample::launch_point(params)),
            tone,
        }
    }
}

impl Default for SimulationDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn run_until_done(driver: &mut SimulationDriver) -> TickOutcome {
        loop {
            let outcome = driver.tick();
            if !outcome.keeps_running() {
                return outcome;
            }
        }
    }

    #[test]
    fn idle_driver_ignores_ticks() {
        let mut driver = SimulationDriver::default();
        assert_eq!(driver.tick(), TickOutcome::Idle);
        assert!(driver.state().is_none());
        assert!(driver.frame().path.is_empty());
    }

    #[test]
    fn start_shows_rest_pose() {
        let mut driver = SimulationDriver::default();
        let params = LaunchParameters::new(3.0, 4.0, 10.0);
        driver.start(params);

        let state = driver.state().expect("run exists after start");
        assert_eq!(state.elapsed_s(), 0.0);
        assert!(state.path().is_empty());
        assert_eq!(state.status(), SimulationStatus::Running);
        assert_eq!(driver.frame().body, PositionSample::launch_point(params));
        assert_eq!(driver.frame().tone, BodyTone::Normal);
    }

    #[test]
    fn each_tick_appends_one_sample() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(5.0, 3.0, 45.0));

        let mut last_elapsed = 0.0;
        for expected_len in 1..=10 {
            assert_eq!(driver.tick(), TickOutcome::Advanced);
            let state = driver.state().expect("running");
            assert_eq!(state.path().len(), expected_len);
            assert!(state.elapsed_s() > last_elapsed);
            last_elapsed = state.elapsed_s();
        }
    }

    #[test]
    fn samples_match_closed_form() {
        let params = LaunchParameters::new(2.0, 5.0, 30.0);
        let mut driver = SimulationDriver::default();
        driver.start(params);
        run_until_done(&mut driver);

        let state = driver.state().expect("finished run");
        let mut t = 0.0;
        for sample in state.path() {
            t += SIM_TIME_STEP_S;
            assert_eq!(*sample, position_at(params, t));
        }
    }

    #[test]
    fn terminal_run_stops_advancing() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(0.0, 0.0, 0.0));
        assert!(matches!(driver.tick(), TickOutcome::Landed(_)));
        assert_eq!(driver.tick(), TickOutcome::Idle);
        assert_eq!(driver.state().map(|s| s.path().len()), Some(1));
    }

    #[test]
    fn exits_when_far_past_right_edge() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(50.0, 60.0, 0.0));
        assert_eq!(run_until_done(&mut driver), TickOutcome::ExitedBounds);
        assert_eq!(driver.status(), Some(SimulationStatus::ExitedBounds));
        assert!(driver.result().is_none());

        let last = driver.state().and_then(SimulationState::last_sample).expect("sampled");
        assert!(last.x_m > 25.0 + 1.0);
    }

    #[test]
    fn exits_when_launched_backwards() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(20.0, 15.0, 180.0));
        assert_eq!(run_until_done(&mut driver), TickOutcome::ExitedBounds);
    }

    #[test]
    fn ground_contact_wins_over_bounds() {
        let config = DriverConfig {
            visible_range: HorizontalBounds {
                min_x_m: -0.1,
                max_x_m: 0.1,
            },
            out_of_bounds_margin_radii: 0.0,
            ..DriverConfig::default()
        };
        let mut driver = SimulationDriver::new(config);
        driver.start(LaunchParameters::new(0.0, 100.0, 0.0));
        assert!(matches!(driver.tick(), TickOutcome::Landed(_)));
    }

    #[test]
    fn range_is_horizontal_speed_times_flight_time() {
        let params = LaunchParameters::new(2.0, 5.0, 30.0);
        let mut driver = SimulationDriver::default();
        driver.start(params);
        let TickOutcome::Landed(result) = run_until_done(&mut driver) else {
            panic!("expected landing");
        };
        assert_eq!(
            result.range_m,
            initial_velocity(params).vx0_mps * result.time_of_flight_s
        );
        assert_eq!(
            result.time_of_flight_s,
            driver.state().map(SimulationState::elapsed_s).unwrap_or_default()
        );
        assert_eq!(driver.result(), Some(&result));
    }

    #[test]
    fn danger_tone_only_after_adverse_landing() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(10.0, 1.0, 90.0));
        driver.tick();
        assert_eq!(driver.frame().tone, BodyTone::Normal);
        run_until_done(&mut driver);
        assert_eq!(driver.frame().tone, BodyTone::Danger);
    }

    #[test]
    fn visible_range_change_does_not_touch_running_run() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(50.0, 60.0, 0.0));
        driver.set_visible_range(HorizontalBounds {
            min_x_m: -1000.0,
            max_x_m: 1000.0,
        });
        assert_eq!(run_until_done(&mut driver), TickOutcome::ExitedBounds);
    }

    #[test]
    fn reset_discards_run() {
        let mut driver = SimulationDriver::default();
        driver.start(LaunchParameters::new(2.0, 5.0, 30.0));
        driver.tick();
        let rest = LaunchParameters::new(4.0, 1.0, 0.0);
        driver.reset(rest);
        assert!(driver.state().is_none());
        assert_eq!(driver.params(), rest);
        assert_relative_eq!(driver.frame().body.height_m, 4.0);
        assert_eq!(driver.tick(), TickOutcome::Idle);
    }
}
