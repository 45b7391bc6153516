use serde::Deserialize;

use crate::core::constants::{
    CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, GROUND_HEIGHT_PX, LEDGE_OFFSET_PX, LEDGE_WIDTH_PX,
    PIXELS_PER_METRE,
};
use crate::core::model::PositionSample;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

pub fn fixed_ratio_axis_window(raw_span_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_span_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_span_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Horizontal extent of the visible area in metres, relative to the launch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalBounds {
    pub min_x_m: f64,
    pub max_x_m: f64,
}

impl HorizontalBounds {
    pub fn contains_with_margin(&self, x_m: f64, margin_m: f64) -> bool {
        x_m >= self.min_x_m - margin_m && x_m <= self.max_x_m + margin_m
    }
}

/// Pixel layout of the drawing surface: a ground strip along the bottom and a ledge on
/// the left whose right edge is the launch point.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
    pub pixels_per_metre: f64,
    pub ground_height_px: f64,
    pub ledge_offset_px: f64,
    pub ledge_width_px: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width_px: CANVAS_WIDTH_PX,
            height_px: CANVAS_HEIGHT_PX,
            pixels_per_metre: PIXELS_PER_METRE,
            ground_height_px: GROUND_HEIGHT_PX,
            ledge_offset_px: LEDGE_OFFSET_PX,
            ledge_width_px: LEDGE_WIDTH_PX,
        }
    }
}

impl Viewport {
    pub fn ground_line_px(&self) -> f64 {
        self.height_px - self.ground_height_px
    }

    pub fn launch_x_px(&self) -> f64 {
        self.ledge_offset_px + self.ledge_width_px
    }

    pub fn metres_to_px(&self, metres: f64) -> f64 {
        metres * self.pixels_per_metre
    }

    /// Canvas coordinates (y grows downwards) of a sample.
    pub fn to_canvas(&self, sample: PositionSample) -> (f64, f64) {
        (
            self.launch_x_px() + self.metres_to_px(sample.x_m),
            self.ground_line_px() - self.metres_to_px(sample.height_m),
        )
    }

    pub fn visible_range(&self) -> HorizontalBounds {
        let scale = self.pixels_per_metre.max(f64::EPSILON);
        HorizontalBounds {
            min_x_m: -self.launch_x_px() / scale,
            max_x_m: (self.width_px - self.launch_x_px()) / scale,
        }
    }

    /// Uniformly scales the layout to the largest size that fits `avail_w` x `avail_h`.
    pub fn fit_to(&self, avail_w: f64, avail_h: f64) -> Self {
        let scale = (avail_w / self.width_px)
            .min(avail_h / self.height_px)
            .max(0.05);
        Self {
            width_px: self.width_px * scale,
            height_px: self.height_px * scale,
            pixels_per_metre: self.pixels_per_metre * scale,
            ground_height_px: self.ground_height_px * scale,
            ledge_offset_px: self.ledge_offset_px * scale,
            ledge_width_px: self.ledge_width_px * scale,
        }
    }
}
