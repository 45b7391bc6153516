use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ANGLE_SLIDER_DEG, HEIGHT_SLIDER_M, PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y,
    SPEED_SLIDER_MPS,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) simulate: bool,
    pub(crate) reset: bool,
    pub(crate) height_changed: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            simulate: self.simulate || other.simulate,
            reset: self.reset || other.reset,
            height_changed: self.height_changed || other.height_changed,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        simulate: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        height_changed: false,
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let height_before = state.controls.height_m;
    let animating = state.frames.is_animating();

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch Controls")
    .ui(&mut *root_ui(), |ui| {
        ui.slider(
            hash!(),
            "Ledge height (m)",
            HEIGHT_SLIDER_M.0..HEIGHT_SLIDER_M.1,
            &mut state.controls.height_m,
        );
        ui.slider(
            hash!(),
            "Speed (m/s)",
            SPEED_SLIDER_MPS.0..SPEED_SLIDER_MPS.1,
            &mut state.controls.speed_mps,
        );
        ui.slider(
            hash!(),
            "Angle (deg)",
            ANGLE_SLIDER_DEG.0..ANGLE_SLIDER_DEG.1,
            &mut state.controls.angle_deg,
        );
        ui.separator();
        if ui.button(None, "Simulate (Space)") {
            actions.simulate = true;
        }
        if ui.button(None, "Reset (R)") {
            actions.reset = true;
        }
        ui.separator();
        ui.label(
            None,
            if animating {
                "Flight state: Running"
            } else {
                "Flight state: Idle"
            },
        );
    });

    actions.height_changed = (state.controls.height_m - height_before).abs() > f32::EPSILON;
    actions
}
