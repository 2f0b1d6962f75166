use std::time::Duration;

use glam::Vec3;

use super::Rotation;

/// Width of the character viewport, in cells
pub const VIEWPORT_COLS: usize = 200;
/// Height of the character viewport, in cells
pub const VIEWPORT_ROWS: usize = 50;

/// Radians added to each axis between two frames
pub const ROTATION_DELTAS: Rotation = Rotation::new(0.05, 0.03, 0.02);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// View direction used for the back-face sign test
pub const CAMERA_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// How far the cube is pushed along +z, away from the camera
pub const Z_PUSH: f32 = 8.0;
pub const SCALE: f32 = 60.0;
/// Character cells are roughly three times taller than wide
pub const ASPECT_COMPENSATION: f32 = 3.0;

pub const BLANK: char = ' ';

#[rustfmt::skip]
pub const SYMBOLS: [char; 12] = [
    '$', '$', '*', '*', '+', '+', '-', '-', '@', '@', '=', '=',
];

/// How the rasterizer walks the two edges of a flat triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStepping {
    /// Recompute each edge column from the endpoints on every row and round it
    #[default]
    Interpolated,
    /// Add a truncated integer slope per row. Drifts on shallow edges but
    /// reproduces the classic output cell for cell.
    Accumulated,
}

/// Every tunable the pipeline and the frame driver read.
///
/// `Config::default()` is the stock look; tests override single fields with
/// struct update syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub cols: usize,
    pub rows: usize,
    pub deltas: Rotation,
    pub interval: Duration,
    pub camera_direction: Vec3,
    pub z_push: f32,
    pub scale: f32,
    pub aspect: f32,
    pub blank: char,
    pub symbols: [char; 12],
    pub stepping: EdgeStepping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: VIEWPORT_COLS,
            rows: VIEWPORT_ROWS,
            deltas: ROTATION_DELTAS,
            interval: FRAME_INTERVAL,
            camera_direction: CAMERA_DIRECTION,
            z_push: Z_PUSH,
            scale: SCALE,
            aspect: ASPECT_COMPENSATION,
            blank: BLANK,
            symbols: SYMBOLS,
            stepping: EdgeStepping::default(),
        }
    }
}
