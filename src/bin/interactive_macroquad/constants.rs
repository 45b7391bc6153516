use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const CONFIG_PATH: &str = "ledge_launch.yaml";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 18.0;
pub const PANEL_WIDTH: f32 = 320.0;
pub const PANEL_HEIGHT: f32 = 260.0;
pub const MARGIN: f32 = 20.0;
pub const RESULTS_HEIGHT: f32 = 150.0;

pub const HEIGHT_SLIDER_M: (f32, f32) = (0.0, 15.0);
pub const SPEED_SLIDER_MPS: (f32, f32) = (0.0, 20.0);
pub const ANGLE_SLIDER_DEG: (f32, f32) = (-90.0, 90.0);

pub const APP_BG: Color = Color::new(0.95, 0.96, 0.97, 1.0);
pub const CANVAS_BG: Color = Color::new(0.89, 0.95, 0.99, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.30, 0.69, 0.31, 1.0);
pub const LEDGE_COLOR: Color = Color::new(0.47, 0.33, 0.28, 1.0);
pub const BODY_COLOR: Color = Color::new(1.0, 0.60, 0.0, 1.0);
pub const DANGER_COLOR: Color = Color::new(0.90, 0.22, 0.21, 1.0);
pub const PATH_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);
pub const PATH_THICKNESS: f32 = 2.0;
