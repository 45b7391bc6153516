use crate::core::driver::{DriverConfig, TickOutcome};
use crate::core::frame_loop::{FrameLoop, Renderer, ResultsSink};
use crate::core::model::{
    BodyTone, FlightResult, Frame, LaunchParameters, PositionSample, SimulationStatus,
};
use crate::error::{Result, SimError};

/// Everything a finished headless run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub params: LaunchParameters,
    pub status: SimulationStatus,
    pub ticks: u64,
    pub elapsed_s: f64,
    pub path: Vec<PositionSample>,
    pub result: Option<FlightResult>,
    pub frames_rendered: u64,
    pub final_tone: BodyTone,
}

impl RunReport {
    /// Path with the launch point in front, as drawn on screen.
    pub fn trace(&self) -> Vec<PositionSample> {
        std::iter::once(PositionSample::launch_point(self.params))
            .chain(self.path.iter().copied())
            .collect()
    }

    /// Recorded samples paired with their tick times, `i * time_step_s` for tick `i`.
    pub fn timed_path(&self, time_step_s: f64) -> impl Iterator<Item = (f64, PositionSample)> + '_ {
        self.path
            .iter()
            .enumerate()
            .map(move |(i, sample)| ((i + 1) as f64 * time_step_s, *sample))
    }
}

struct Recorder {
    frames_rendered: u64,
    final_tone: BodyTone,
    result: Option<FlightResult>,
    exited: bool,
}

impl Renderer for Recorder {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames_rendered += 1;
        self.final_tone = frame.tone;
    }
}

impl ResultsSink for Recorder {
    fn clear(&mut self) {
        self.result = None;
        self.exited = false;
    }

    fn flight_finished(&mut self, result: &FlightResult) {
        self.result = Some(result.clone());
    }

    fn exited_bounds(&mut self) {
        self.exited = true;
    }
}

/// Runs one simulation to completion without a display, one tick per loop iteration.
pub fn simulate(
    params: LaunchParameters,
    config: &DriverConfig,
    tick_limit: u64,
) -> Result<RunReport> {
    if !params.is_finite() {
        return Err(SimError::NonFiniteInput);
    }

    let mut frames = FrameLoop::new(*config);
    let mut recorder = Recorder {
        frames_rendered: 0,
        final_tone: BodyTone::Normal,
        result: None,
        exited: false,
    };
    frames.start(params, &mut recorder);

    let mut ticks = 0u64;
    loop {
        match frames.on_frame(&mut recorder) {
            TickOutcome::Advanced => {
                ticks += 1;
                if ticks >= tick_limit {
                    log::warn!("giving up after {ticks} ticks");
                    return Err(SimError::TickLimit(tick_limit));
                }
            }
            TickOutcome::Landed(_) | TickOutcome::ExitedBounds | TickOutcome::Idle => break,
        }
    }

    let driver = frames.driver();
    let state = driver.state().ok_or(SimError::NotStarted)?;
    debug_assert_eq!(recorder.exited, state.status() == SimulationStatus::ExitedBounds);

    Ok(RunReport {
        params,
        status: state.status(),
        ticks: state.ticks(),
        elapsed_s: state.elapsed_s(),
        path: state.path().to_vec(),
        result: recorder.result,
        frames_rendered: recorder.frames_rendered,
        final_tone: recorder.final_tone,
    })
}
