pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

pub const SIM_TIME_STEP_S: f64 = 0.016;
pub const BODY_RADIUS_M: f64 = 0.2;
pub const OUT_OF_BOUNDS_MARGIN_RADII: f64 = 5.0;
pub const CRITICAL_FALL_HEIGHT_M: f64 = 7.0;
pub const DEFAULT_TICK_LIMIT: u64 = 1_000_000;

pub const DEFAULT_LAUNCH_HEIGHT_M: f64 = 2.0;
pub const DEFAULT_LAUNCH_SPEED_MPS: f64 = 5.0;
pub const DEFAULT_LAUNCH_ANGLE_DEG: f64 = 30.0;

pub const CANVAS_WIDTH_PX: f64 = 800.0;
pub const CANVAS_HEIGHT_PX: f64 = 500.0;
pub const PIXELS_PER_METRE: f64 = 30.0;
pub const GROUND_HEIGHT_PX: f64 = 30.0;
pub const LEDGE_OFFSET_PX: f64 = 0.0;
pub const LEDGE_WIDTH_PX: f64 = 50.0;
