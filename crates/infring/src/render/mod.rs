pub mod theme;
#[cfg(feature = "render")]
pub mod view;

pub use theme::{HexColor, Theme};
#[cfg(feature = "render")]
pub use view::{draw, render_png, render_surface, render_svg};

pub const REFERENCE_SIZE: f64 = 480.0; // canvas size the pixel constants below are tuned for
pub const CIRCLE_LINE_WIDTH: f64 = 1.0;
pub const ARROW_LINE_WIDTH: f64 = 0.8;
pub const TICK_RADIUS: f64 = 2.5;
pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 8192;
