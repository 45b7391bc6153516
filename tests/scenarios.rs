use approx::{assert_abs_diff_eq, assert_relative_eq};

use ledge_launch::core::constants::{EARTH_GRAVITY_MPS2, SIM_TIME_STEP_S};
use ledge_launch::core::trajectory::{contact_time, initial_velocity, peak_height, position_at};
use ledge_launch::{
    DriverConfig, FlightResult, LaunchParameters, SimulationDriver, SimulationStatus,
    TickOutcome, simulate,
};

const TICK_LIMIT: u64 = 100_000;

fn land(params: LaunchParameters) -> FlightResult {
    let report = simulate(params, &DriverConfig::default(), TICK_LIMIT).expect("run completes");
    assert_eq!(report.status, SimulationStatus::LandedOnGround);
    report.result.expect("landed runs carry a result")
}

/// Launch sets that stay inside the default visible area.
fn landing_cases() -> Vec<LaunchParameters> {
    vec![
        LaunchParameters::new(2.0, 5.0, 30.0),
        LaunchParameters::new(0.0, 0.0, 0.0),
        LaunchParameters::new(10.0, 1.0, 90.0),
        LaunchParameters::new(1.0, 20.0, 0.0),
        LaunchParameters::new(5.0, 8.0, 60.0),
        LaunchParameters::new(3.0, 4.0, -45.0),
        LaunchParameters::new(12.0, 0.0, 0.0),
        LaunchParameters::new(0.5, 6.0, 75.0),
    ]
}

#[test]
fn scenario_a_regular_launch_lands() {
    let result = land(LaunchParameters::new(2.0, 5.0, 30.0));
    assert!(result.range_m > 0.0);
    assert!(result.peak_height_m >= 2.0);
    assert!(result.time_of_flight_s > 0.0);
    assert!(!result.safety.is_adverse);
}

#[test]
fn scenario_b_resting_body_lands_on_first_tick() {
    let params = LaunchParameters::new(0.0, 0.0, 0.0);
    let mut driver = SimulationDriver::default();
    driver.start(params);

    let TickOutcome::Landed(result) = driver.tick() else {
        panic!("first tick must detect ground contact");
    };
    assert_eq!(result.range_m, 0.0);
    assert_eq!(result.time_of_flight_s, SIM_TIME_STEP_S);
    assert_eq!(result.peak_height_m, 0.0);
    assert_eq!(driver.status(), Some(SimulationStatus::LandedOnGround));
}

#[test]
fn scenario_c_straight_up_from_high_ledge_is_adverse() {
    let result = land(LaunchParameters::new(10.0, 1.0, 90.0));
    assert!(result.peak_height_m > 10.0);
    assert!(result.safety.is_adverse);
}

#[test]
fn scenario_d_level_launch_peaks_at_ledge() {
    let result = land(LaunchParameters::new(1.0, 20.0, 0.0));
    assert_eq!(result.peak_height_m, 1.0);
    assert!(!result.safety.is_adverse);
}

#[test]
fn closed_form_peak_is_ledge_height_when_not_rising() {
    for angle in [-90.0, -30.0, 0.0] {
        assert_eq!(peak_height(LaunchParameters::new(3.0, 7.0, angle)), 3.0);
    }
}

#[test]
fn closed_form_peak_matches_vertex() {
    for angle in [10.0, 45.0, 80.0, 90.0] {
        let params = LaunchParameters::new(1.5, 9.0, angle);
        let vy0 = initial_velocity(params).vy0_mps;
        assert_relative_eq!(
            peak_height(params),
            1.5 + vy0 * vy0 / (2.0 * EARTH_GRAVITY_MPS2),
            epsilon = 1e-12
        );
    }
}

#[test]
fn resampled_peak_stays_within_one_step_of_vertex() {
    for params in landing_cases() {
        let result = land(params);
        let closed = peak_height(params).max(0.0);
        // Largest drop of the parabola within one step of its vertex.
        let slack = 0.5 * EARTH_GRAVITY_MPS2 * SIM_TIME_STEP_S * SIM_TIME_STEP_S + 1e-12;
        assert!(result.peak_height_m >= params.height_m.max(0.0));
        assert!(result.peak_height_m <= closed + 1e-12);
        assert!(closed - result.peak_height_m <= slack, "{params:?}");
    }
}

#[test]
fn range_is_exactly_horizontal_speed_times_flight_time() {
    for params in landing_cases() {
        let result = land(params);
        assert_eq!(
            result.range_m,
            initial_velocity(params).vx0_mps * result.time_of_flight_s
        );
    }
}

#[test]
fn sampled_flight_time_trails_exact_contact_by_under_one_step() {
    let config = DriverConfig::default();
    for params in landing_cases() {
        let result = land(params);
        let exact = contact_time(params, config.body_radius_m).unwrap_or(0.0);
        assert!(result.time_of_flight_s >= exact - 1e-9, "{params:?}");
        assert!(result.time_of_flight_s - exact < SIM_TIME_STEP_S + 1e-9, "{params:?}");
    }
}

#[test]
fn path_grows_one_sample_per_tick() {
    let mut driver = SimulationDriver::default();
    driver.start(LaunchParameters::new(5.0, 8.0, 60.0));

    let mut previous = (0usize, 0.0f64);
    while driver.is_running() {
        driver.tick();
        let state = driver.state().expect("run in progress");
        assert_eq!(state.path().len(), previous.0 + 1);
        assert!(state.elapsed_s() > previous.1);
        previous = (state.path().len(), state.elapsed_s());
    }
}

#[test]
fn path_heights_follow_closed_form() {
    let params = LaunchParameters::new(3.0, 4.0, -45.0);
    let report = simulate(params, &DriverConfig::default(), TICK_LIMIT).expect("run completes");
    let mut t = 0.0;
    for sample in &report.path {
        t += SIM_TIME_STEP_S;
        let expected = position_at(params, t);
        assert_abs_diff_eq!(sample.height_m, expected.height_m, epsilon = 1e-12);
        assert_abs_diff_eq!(sample.x_m, expected.x_m, epsilon = 1e-12);
    }
}

#[test]
fn starting_twice_gives_identical_initial_state() {
    let params = LaunchParameters::new(2.0, 5.0, 30.0);
    let mut driver = SimulationDriver::default();

    driver.start(params);
    let first = driver.state().cloned();
    driver.tick();
    driver.tick();
    driver.start(params);
    let second = driver.state().cloned();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn horizontal_launch_at_ground_level_stops_immediately() {
    let mut driver = SimulationDriver::default();
    driver.start(LaunchParameters::new(0.0, 3.0, 0.0));
    assert!(matches!(driver.tick(), TickOutcome::Landed(_)));
    assert_eq!(driver.tick(), TickOutcome::Idle);
}

#[test]
fn fast_level_launch_leaves_the_visible_area() {
    let report = simulate(
        LaunchParameters::new(20.0, 40.0, 10.0),
        &DriverConfig::default(),
        TICK_LIMIT,
    )
    .expect("run completes");
    assert_eq!(report.status, SimulationStatus::ExitedBounds);
    assert!(report.result.is_none());
}

#[test]
fn critical_height_is_configurable() {
    let config = DriverConfig {
        critical_fall_height_m: 1.5,
        ..DriverConfig::default()
    };
    let report = simulate(LaunchParameters::new(2.0, 5.0, 30.0), &config, TICK_LIMIT)
        .expect("run completes");
    assert!(report.result.expect("landed").safety.is_adverse);
}
