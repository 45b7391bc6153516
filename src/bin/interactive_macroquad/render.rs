use macroquad::prelude::*;

use ledge_launch::core::window::Viewport;
use ledge_launch::{BodyTone, PositionSample};

use crate::constants::{
    BODY_COLOR, CANVAS_BG, DANGER_COLOR, GROUND_COLOR, LEDGE_COLOR, PATH_COLOR, PATH_THICKNESS,
};
use crate::state::Scene;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn to_screen(viewport: &Viewport, origin: Vec2, sample: PositionSample) -> Vec2 {
    let (x, y) = viewport.to_canvas(sample);
    origin + vec2(x as f32, y as f32)
}

fn draw_ground(viewport: &Viewport, origin: Vec2) {
    draw_rectangle(
        origin.x,
        origin.y + viewport.ground_line_px() as f32,
        viewport.width_px as f32,
        viewport.ground_height_px as f32,
        GROUND_COLOR,
    );
}

fn draw_ledge(viewport: &Viewport, origin: Vec2, launch_height_m: f64) {
    let ledge_h = viewport.metres_to_px(launch_height_m.max(0.0)) as f32;
    draw_rectangle(
        origin.x + viewport.ledge_offset_px as f32,
        origin.y + viewport.ground_line_px() as f32 - ledge_h,
        viewport.ledge_width_px as f32,
        ledge_h,
        LEDGE_COLOR,
    );
}

fn draw_path(viewport: &Viewport, origin: Vec2, launch_height_m: f64, path: &[PositionSample]) {
    if path.is_empty() {
        return;
    }
    let launch = PositionSample {
        x_m: 0.0,
        height_m: launch_height_m,
    };
    let mut prev = to_screen(viewport, origin, launch);
    for sample in path.iter().copied() {
        let cur = to_screen(viewport, origin, sample);
        draw_line(prev.x, prev.y, cur.x, cur.y, PATH_THICKNESS, PATH_COLOR);
        prev = cur;
    }
}

fn draw_body(viewport: &Viewport, origin: Vec2, body: PositionSample, radius_m: f64, tone: BodyTone) {
    let p = to_screen(viewport, origin, body);
    let radius_px = (viewport.metres_to_px(radius_m) as f32).max(2.0);
    let fill = match tone {
        BodyTone::Normal => BODY_COLOR,
        BodyTone::Danger => DANGER_COLOR,
    };
    draw_circle(p.x, p.y, radius_px, fill);
}

pub(crate) fn draw_scene(scene: &Scene, viewport: &Viewport, origin: Vec2, body_radius_m: f64) {
    draw_rectangle(
        origin.x,
        origin.y,
        viewport.width_px as f32,
        viewport.height_px as f32,
        CANVAS_BG,
    );
    draw_ground(viewport, origin);
    draw_ledge(viewport, origin, scene.launch_height_m);
    draw_path(viewport, origin, scene.launch_height_m, &scene.path);
    draw_body(viewport, origin, scene.body, body_radius_m, scene.tone);
    draw_rectangle_lines(
        origin.x,
        origin.y,
        viewport.width_px as f32,
        viewport.height_px as f32,
        1.5,
        DARKGRAY,
    );
}
