use macroquad::prelude::*;

use crate::render::draw_ui_text;
use crate::state::{AppRuntime, ResultsPanel};

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, top: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let params = state.controls.to_params();

    draw_ui_text(
        &format!(
            "Height: {:.1} m | Speed: {:.1} m/s | Angle: {:.0} deg | Flight: {:.2} s",
            params.height_m,
            params.speed_mps,
            params.angle_deg,
            state.elapsed_s()
        ),
        left,
        top + 24.0,
        22,
        header_color,
        font,
    );

    let (range, peak, time) = match &state.scene.results {
        ResultsPanel::Finished(result) => (
            format!("{:.2}", result.range_m),
            format!("{:.2}", result.peak_height_m),
            format!("{:.2}", result.time_of_flight_s),
        ),
        ResultsPanel::Empty | ResultsPanel::ExitedBounds => {
            ("--".to_string(), "--".to_string(), "--".to_string())
        }
    };
    draw_ui_text(
        &format!("Range: {range} m | Max height: {peak} m | Time of flight: {time} s"),
        left,
        top + 58.0,
        22,
        BLUE,
        font,
    );

    match &state.scene.results {
        ResultsPanel::Finished(result) => {
            let color = if result.safety.is_adverse {
                Color::from_rgba(198, 40, 40, 255)
            } else {
                DARKGREEN
            };
            draw_ui_text(&result.safety.message, left, top + 92.0, 20, color, font);
        }
        ResultsPanel::ExitedBounds => draw_ui_text(
            "The body flew off-screen horizontally; no measurements.",
            left,
            top + 92.0,
            20,
            DARKGRAY,
            font,
        ),
        ResultsPanel::Empty => {}
    }
}
