use std::path::Path;

use log::LevelFilter;
use macroquad::prelude::{
    Conf, clear_background, load_ttf_font, next_frame, screen_height, screen_width, vec2,
};

use ledge_launch::{SimulationConfig, logging};

use crate::constants::{
    APP_BG, CONFIG_PATH, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MARGIN, MSAA_SAMPLES,
    PANEL_WIDTH, PANEL_X, RESULTS_HEIGHT, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::draw_scene;
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Ledge Launch".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_config() -> SimulationConfig {
    let path = Path::new(CONFIG_PATH);
    if !path.exists() {
        return SimulationConfig::default();
    }
    match SimulationConfig::load(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using built-in defaults");
            SimulationConfig::default()
        }
    }
}

pub(crate) async fn run() {
    logging::init(LevelFilter::Info);

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config());

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let canvas_left = PANEL_X + PANEL_WIDTH + MARGIN;
        let avail_w = (screen_w - canvas_left - MARGIN).max(1.0);
        let avail_h = (screen_h - RESULTS_HEIGHT - 2.0 * MARGIN).max(1.0);
        let viewport = state
            .config
            .viewport
            .fit_to(f64::from(avail_w), f64::from(avail_h));
        state.frames.set_visible_range(viewport.visible_range());

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        state.update(actions);

        clear_background(APP_BG);
        let origin = vec2(canvas_left, MARGIN);
        draw_scene(&state.scene, &viewport, origin, state.config.body_radius_m);
        draw_hud(
            &state,
            canvas_left,
            MARGIN + viewport.height_px as f32,
            ui_font.as_ref(),
        );

        next_frame().await;
    }
}
