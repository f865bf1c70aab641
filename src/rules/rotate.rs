//! Move resolution
//!
//! A move is a single rotation:
//! 1. Reject it if the state does not fit the board, it reverses the previous
//!    move, or the ring is unknown or bare
//! 2. Shift the stones on the ring one step
//! 3. Resolve quads against the shifted board
//! 4. Score, then hand the turn over unless something scored

use super::board::Board;
use super::quads::Quad;
use super::state::{Direction, GameState, Move, Player};
use super::topology::{PointId, RingId};
use crate::consts::RING_COUNT;

/// Why a rotation was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The ring id does not exist
    UnknownRing(RingId),
    /// Same ring, opposite direction of the previous move
    ImmediateUndo,
    /// The ring carries no points
    EmptyRing(RingId),
    /// No ring was selected
    NoSelection,
    /// The state was not built for this board
    StateMismatch { expected: usize, actual: usize },
}

/// A quad that scored during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredQuad {
    /// Index into the board's quad list
    pub index: usize,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The rotation happened; `fired` lists scoring quads in resolution order
    Applied { fired: Vec<FiredQuad> },
    /// Illegal move, state untouched
    Rejected(Rejection),
}

impl RotateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RotateOutcome::Applied { .. })
    }

    pub fn fired(&self) -> &[FiredQuad] {
        match self {
            RotateOutcome::Applied { fired } => fired,
            RotateOutcome::Rejected(_) => &[],
        }
    }
}

/// Points a legal move would rotate, or why the move is illegal
pub fn check_move<'a>(board: &'a Board, state: &GameState, mv: Move) -> Result<&'a [PointId], Rejection> {
    let expected = board.topology.point_count();
    if state.occupancy.len() != expected {
        return Err(Rejection::StateMismatch {
            expected,
            actual: state.occupancy.len(),
        });
    }
    if state.last_move == Some(mv.inverse()) {
        return Err(Rejection::ImmediateUndo);
    }
    if board.topology.ring(mv.ring).is_none() {
        return Err(Rejection::UnknownRing(mv.ring));
    }
    let points = board.topology.points_on_ring(mv.ring);
    if points.is_empty() {
        return Err(Rejection::EmptyRing(mv.ring));
    }
    Ok(points)
}

/// Every move the side to move may play, in ring then direction order
pub fn legal_moves<'a>(board: &'a Board, state: &'a GameState) -> impl Iterator<Item = Move> + 'a {
    (0..RING_COUNT)
        .flat_map(|ring| {
            [Direction::Clockwise, Direction::CounterClockwise]
                .into_iter()
                .map(move |direction| Move::new(ring, direction))
        })
        .filter(move |&mv| check_move(board, state, mv).is_ok())
}

/// Apply a rotation to `state`
pub fn rotate(board: &Board, state: &mut GameState, mv: Move) -> RotateOutcome {
    let ring_points = match check_move(board, state, mv) {
        Ok(points) => points,
        Err(reason) => {
            log::debug!("Rejected {:?}: {:?}", mv, reason);
            return RotateOutcome::Rejected(reason);
        }
    };

    shift_ring(&mut state.occupancy, ring_points, mv.direction);
    let fired = resolve_quads(&board.quads, &mut state.occupancy);

    for quad in &fired {
        log::info!("Quad {} scores for {}", quad.index, quad.player.as_str());
        state.award(quad.player);
    }

    let mover = state.current_player;
    if fired.is_empty() {
        state.current_player = mover.opponent();
    }
    state.last_move = Some(mv);

    log::debug!(
        "{} rotated ring {} {:?}: {} quad(s), score {}-{}",
        mover.as_str(),
        mv.ring,
        mv.direction,
        fired.len(),
        state.score_white,
        state.score_black
    );

    RotateOutcome::Applied { fired }
}

/// Cyclically shift the stones on `ring_points` (in angular order) one step.
///
/// Clockwise: each point takes its predecessor's stone. Counter-clockwise:
/// each point takes its successor's stone.
pub fn shift_ring(occupancy: &mut [Option<Player>], ring_points: &[PointId], direction: Direction) {
    let mut stones: Vec<Option<Player>> = ring_points.iter().map(|&p| occupancy[p]).collect();
    match direction {
        Direction::Clockwise => stones.rotate_right(1),
        Direction::CounterClockwise => stones.rotate_left(1),
    }
    for (&point, stone) in ring_points.iter().zip(stones) {
        occupancy[point] = stone;
    }
}

/// Find and clear every uniform quad.
///
/// Quads are checked in list order against the board as it was before any
/// clearing. A quad sharing a point with one that already fired in this pass
/// is skipped. Cleared points are emptied only after all quads are checked.
pub fn resolve_quads(quads: &[Quad], occupancy: &mut [Option<Player>]) -> Vec<FiredQuad> {
    let mut claimed = vec![false; occupancy.len()];
    let mut fired = Vec::new();

    for (index, quad) in quads.iter().enumerate() {
        if quad.points.iter().any(|&p| claimed[p]) {
            continue;
        }
        let Some(player) = occupancy[quad.points[0]] else {
            continue;
        };
        if quad.points.iter().all(|&p| occupancy[p] == Some(player)) {
            for &p in &quad.points {
                claimed[p] = true;
            }
            fired.push(FiredQuad { index, player });
        }
    }

    for (stone, _) in occupancy.iter_mut().zip(&claimed).filter(|(_, c)| **c) {
        *stone = None;
    }

    fired
}
