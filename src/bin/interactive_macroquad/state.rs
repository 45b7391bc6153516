use crate::controls::FrameActions;

use ledge_launch::{
    BodyTone, FlightResult, Frame, FrameLoop, LaunchParameters, PositionSample, Renderer,
    ResultsSink, SimulationConfig,
};

#[derive(Clone, Copy)]
pub(crate) struct ControlValues {
    pub(crate) height_m: f32,
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
}

impl ControlValues {
    pub(crate) fn from_params(params: LaunchParameters) -> Self {
        Self {
            height_m: params.height_m as f32,
            speed_mps: params.speed_mps as f32,
            angle_deg: params.angle_deg as f32,
        }
    }

    pub(crate) fn to_params(self) -> LaunchParameters {
        LaunchParameters::new(
            f64::from(self.height_m),
            f64::from(self.speed_mps),
            f64::from(self.angle_deg),
        )
    }
}

pub(crate) enum ResultsPanel {
    Empty,
    Finished(FlightResult),
    ExitedBounds,
}

/// Last frame handed over by the simulation, kept for redrawing every display refresh.
pub(crate) struct Scene {
    pub(crate) launch_height_m: f64,
    pub(crate) path: Vec<PositionSample>,
    pub(crate) body: PositionSample,
    pub(crate) tone: BodyTone,
    pub(crate) results: ResultsPanel,
}

impl Scene {
    pub(crate) fn new() -> Self {
        Self {
            launch_height_m: 0.0,
            path: Vec::new(),
            body: PositionSample {
                x_m: 0.0,
                height_m: 0.0,
            },
            tone: BodyTone::Normal,
            results: ResultsPanel::Empty,
        }
    }
}

impl Renderer for Scene {
    fn render(&mut self, frame: &Frame<'_>) {
        self.launch_height_m = frame.launch_height_m;
        self.body = frame.body;
        self.tone = frame.tone;
        // Paths only grow during a run; a shorter one means a new run or a reset.
        if frame.path.len() < self.path.len() {
            self.path.clear();
        }
        let known = self.path.len();
        self.path.extend_from_slice(&frame.path[known..]);
    }
}

impl ResultsSink for Scene {
    fn clear(&mut self) {
        self.results = ResultsPanel::Empty;
    }

    fn flight_finished(&mut self, result: &FlightResult) {
        self.results = ResultsPanel::Finished(result.clone());
    }

    fn exited_bounds(&mut self) {
        self.results = ResultsPanel::ExitedBounds;
    }
}

pub(crate) struct AppRuntime {
    pub(crate) config: SimulationConfig,
    pub(crate) frames: FrameLoop,
    pub(crate) controls: ControlValues,
    pub(crate) scene: Scene,
}

impl AppRuntime {
    pub(crate) fn new(config: SimulationConfig) -> Self {
        let mut frames = FrameLoop::new(config.driver_config());
        let mut scene = Scene::new();
        frames.reset(config.launch, &mut scene);
        Self {
            controls: ControlValues::from_params(config.launch),
            config,
            frames,
            scene,
        }
    }

    pub(crate) fn simulate(&mut self) {
        self.frames.start(self.controls.to_params(), &mut self.scene);
    }

    pub(crate) fn reset(&mut self) {
        self.controls = ControlValues::from_params(self.config.launch);
        self.frames.reset(self.config.launch, &mut self.scene);
    }

    pub(crate) fn preview(&mut self) {
        self.frames.preview(self.controls.to_params(), &mut self.scene);
    }

    /// Applies this refresh's input, then fires the pending tick. A run started in this
    /// refresh shows its rest pose first and takes its first tick on the next one.
    pub(crate) fn update(&mut self, actions: FrameActions) {
        if actions.reset {
            self.reset();
        } else if actions.simulate {
            self.simulate();
            return;
        } else if actions.height_changed {
            self.preview();
        }
        self.frames.on_frame(&mut self.scene);
    }

    pub(crate) fn elapsed_s(&self) -> f64 {
        self.frames
            .driver()
            .state()
            .map_or(0.0, |state| state.elapsed_s())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate_pressed() -> FrameActions {
        FrameActions {
            simulate: true,
            ..FrameActions::default()
        }
    }

    #[test]
    fn start_refresh_shows_rest_pose() {
        let mut state = AppRuntime::new(SimulationConfig::default());
        state.update(simulate_pressed());

        assert!(state.scene.path.is_empty());
        assert_eq!(state.scene.body.x_m, 0.0);
        assert_eq!(state.scene.body.height_m, state.config.launch.height_m);
        assert_eq!(state.elapsed_s(), 0.0);
        assert!(state.frames.is_animating());
    }

    #[test]
    fn first_tick_lands_on_next_refresh() {
        let mut state = AppRuntime::new(SimulationConfig::default());
        state.update(simulate_pressed());
        state.update(FrameActions::default());

        assert_eq!(state.scene.path.len(), 1);
        assert_eq!(state.elapsed_s(), state.config.time_step_s);
    }

    #[test]
    fn reset_refresh_stops_the_run() {
        let mut state = AppRuntime::new(SimulationConfig::default());
        state.update(simulate_pressed());
        state.update(FrameActions::default());
        state.update(FrameActions {
            reset: true,
            ..FrameActions::default()
        });

        assert!(!state.frames.is_animating());
        assert!(state.scene.path.is_empty());
        assert!(matches!(state.scene.results, ResultsPanel::Empty));
    }
}
