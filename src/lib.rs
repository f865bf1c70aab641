//! Five Rings - rules engine for a ring-rotation stone game
//!
//! Core modules:
//! - `rules`: Deterministic board construction and move resolution
//! - `session`: The single mutable game session a presentation layer drives
//! - `settings`: Board configuration (JSON)
//! - `error`: Crate error type

pub mod error;
pub mod rules;
pub mod session;
pub mod settings;

pub use error::{Error, Result};
pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Board configuration constants
pub mod consts {
    /// Number of major angular positions around the board
    pub const MAJOR_POSITIONS: usize = 5;
    /// Rings per major position (one inner, one outer)
    pub const RINGS_PER_POSITION: usize = 2;
    /// Total ring count
    pub const RING_COUNT: usize = MAJOR_POSITIONS * RINGS_PER_POSITION;
    /// Stones in a scoring group
    pub const QUAD_SIZE: usize = 4;

    /// Distance of each major position from the board center, relative to scale
    pub const MAJOR_RADIUS_RATIO: f32 = 0.17;
    /// Inner ring radius, relative to scale
    pub const INNER_RADIUS_RATIO: f32 = 0.25;
    /// Outer ring radius, relative to scale
    pub const OUTER_RADIUS_RATIO: f32 = 0.28;

    /// Size of one quantization cell in working coordinates.
    /// Intersections rounding to the same cell are the same point.
    pub const GRID_UNIT: f32 = 1.0;

    /// Default board scale (side of the square working space)
    pub const DEFAULT_BOARD_SCALE: f32 = 800.0;
    /// Smallest scale at which distinct intersections never share a grid cell
    pub const MIN_BOARD_SCALE: f32 = 100.0;
    /// Largest scale whose quantized coordinates stay well inside `i32`
    /// and whose intersections keep sub-unit `f32` precision
    pub const MAX_BOARD_SCALE: f32 = 1_000_000.0;

    /// Points on a correctly built board
    pub const POINT_COUNT: usize = 80;
    /// Points on each ring of a correctly built board
    pub const POINTS_PER_RING: usize = 16;
    /// Quads on a correctly built board
    pub const QUAD_COUNT: usize = 20;
}

/// Angle of major position `index`, with position 0 at the top.
///
/// Working coordinates are y-down, so -π/2 points up.
#[inline]
pub fn major_angle(index: usize) -> f32 {
    use std::f32::consts::{FRAC_PI_2, TAU};
    index as f32 / consts::MAJOR_POSITIONS as f32 * TAU - FRAC_PI_2
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of `pos` as seen from `center`, in [-π, π]
#[inline]
pub fn angle_around(center: Vec2, pos: Vec2) -> f32 {
    let d = pos - center;
    d.y.atan2(d.x)
}
