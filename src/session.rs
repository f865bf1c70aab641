//! Game session
//!
//! Owns the board and the single mutable game state. The presentation layer
//! holds one `Session`, reads the board for drawing, and feeds it resolved
//! `(ring, direction)` moves.

use crate::error::Result;
use crate::rules::{self, Board, Direction, GameState, Move, Rejection, RingId, RotateOutcome, Topology};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    state: GameState,
    selected_ring: Option<RingId>,
}

impl Session {
    /// Build a fresh game from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::with_scale(settings.board_scale)
    }

    pub fn with_scale(scale: f32) -> Result<Self> {
        let board = Board::build(scale)?;
        let state = GameState::new(&board.topology);
        Ok(Self {
            board,
            state,
            selected_ring: None,
        })
    }

    /// Rebuild the board and start over. On error the current game is kept.
    pub fn setup(&mut self, scale: f32) -> Result<()> {
        *self = Self::with_scale(scale)?;
        log::info!("New game at scale {}", scale);
        Ok(())
    }

    /// Start over on the current board
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.board.topology);
        self.selected_ring = None;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn topology(&self) -> &Topology {
        &self.board.topology
    }

    pub fn selected_ring(&self) -> Option<RingId> {
        self.selected_ring
    }

    /// Select a ring for the next rotation. Unknown ids are ignored.
    pub fn select_ring(&mut self, ring: RingId) -> bool {
        if self.board.topology.ring(ring).is_none() {
            return false;
        }
        self.selected_ring = Some(ring);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_ring = None;
    }

    /// Rotate `ring`. Illegal moves leave the session unchanged.
    pub fn rotate(&mut self, ring: RingId, direction: Direction) -> RotateOutcome {
        let outcome = rules::rotate(&self.board, &mut self.state, Move::new(ring, direction));
        if outcome.is_applied() {
            self.selected_ring = None;
        }
        outcome
    }

    /// Rotate by a raw `+1` / `-1` sign. Other values are rejected as unknown input.
    pub fn rotate_sign(&mut self, ring: RingId, sign: i32) -> Option<RotateOutcome> {
        Direction::from_sign(sign).map(|direction| self.rotate(ring, direction))
    }

    /// Rotate the selected ring
    pub fn rotate_selected(&mut self, direction: Direction) -> RotateOutcome {
        match self.selected_ring {
            Some(ring) => self.rotate(ring, direction),
            None => RotateOutcome::Rejected(Rejection::NoSelection),
        }
    }
}
