use crate::core::driver::{DriverConfig, SimulationDriver, TickOutcome};
use crate::core::model::{FlightResult, Frame, LaunchParameters};
use crate::core::schedule::{FrameTicker, TickHandle};
use crate::core::window::HorizontalBounds;

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

pub trait ResultsSink {
    fn clear(&mut self);
    fn flight_finished(&mut self, result: &FlightResult);
    fn exited_bounds(&mut self);
}

/// Drives a [`SimulationDriver`] from an external frame source. Each fired frame runs
/// one tick, and another frame is requested only while the run keeps going.
#[derive(Debug, Default)]
pub struct FrameLoop {
    driver: SimulationDriver,
    ticker: FrameTicker,
    pending: Option<TickHandle>,
}

impl FrameLoop {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            driver: SimulationDriver::new(config),
            ticker: FrameTicker::new(),
            pending: None,
        }
    }

    pub fn driver(&self) -> &SimulationDriver {
        &self.driver
    }

    pub fn set_visible_range(&mut self, visible_range: HorizontalBounds) {
        self.driver.set_visible_range(visible_range);
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.ticker.cancel(handle);
        }
    }

    pub fn start<V>(&mut self, params: LaunchParameters, view: &mut V)
    where
        V: Renderer + ResultsSink,
    {
        self.cancel_pending();
        self.driver.start(params);
        view.clear();
        view.render(&self.driver.frame());
        self.pending = Some(self.ticker.request());
    }

    pub fn reset<V>(&mut self, params: LaunchParameters, view: &mut V)
    where
        V: Renderer + ResultsSink,
    {
        self.cancel_pending();
        self.driver.reset(params);
        view.clear();
        view.render(&self.driver.frame());
    }

    /// Redraws the rest pose for new parameters unless a run is animating. Results
    /// already reported stay with the sink.
    pub fn preview<R: Renderer>(&mut self, params: LaunchParameters, renderer: &mut R) -> bool {
        if self.is_animating() {
            return false;
        }
        self.driver.reset(params);
        renderer.render(&self.driver.frame());
        true
    }

    pub fn on_frame<V>(&mut self, view: &mut V) -> TickOutcome
    where
        V: Renderer + ResultsSink,
    {
        let Some(handle) = self.ticker.fire() else {
            return TickOutcome::Idle;
        };
        if self.pending != Some(handle) {
            return TickOutcome::Idle;
        }
        self.pending = None;

        let outcome = self.driver.tick();
        view.render(&self.driver.frame());
        match &outcome {
            TickOutcome::Advanced => self.pending = Some(self.ticker.request()),
            TickOutcome::Landed(result) => view.flight_finished(result),
            TickOutcome::ExitedBounds => view.exited_bounds(),
            TickOutcome::Idle => {}
        }
        outcome
    }
}
