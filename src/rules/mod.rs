//! Deterministic rules module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Board geometry derived from the scale alone
//! - Stable point ids (row-major order of quantized keys)
//! - Fixed quad resolution order
//! - No rendering or platform dependencies

pub mod board;
pub mod circle;
pub mod quads;
pub mod rotate;
pub mod state;
pub mod topology;

pub use board::Board;
pub use circle::Circle;
pub use quads::{Quad, enumerate_quads};
pub use rotate::{
    FiredQuad, Rejection, RotateOutcome, check_move, legal_moves, resolve_quads, rotate, shift_ring,
};
pub use state::{Direction, GameState, Move, Player};
pub use topology::{Point, PointId, PointKey, Ring, RingId, RingKind, Topology};
