pub mod constants;
pub mod driver;
pub mod frame_loop;
pub mod model;
pub mod safety;
pub mod schedule;
pub mod trajectory;
pub mod window;
