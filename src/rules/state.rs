//! Game state and core rule types
//!
//! `GameState` is the only thing that changes from turn to turn. Rings,
//! points and quads are fixed once the board is built.

use serde::{Deserialize, Serialize};

use super::topology::{PointId, RingId, Topology};

/// Stone color, also the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +1: each point takes the stone of its counter-clockwise neighbour
    Clockwise,
    /// -1: each point takes the stone of its clockwise neighbour
    CounterClockwise,
}

impl Direction {
    /// Parse a +1 / -1 sign. Any other value is not a direction.
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Direction::Clockwise),
            -1 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A rotation of one ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub ring: RingId,
    pub direction: Direction,
}

impl Move {
    pub fn new(ring: RingId, direction: Direction) -> Self {
        Self { ring, direction }
    }

    /// The move that would undo this one
    pub fn inverse(self) -> Self {
        Self {
            ring: self.ring,
            direction: self.direction.reversed(),
        }
    }
}

/// Complete mutable game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Stone on each point, indexed by point id (`None` is empty)
    pub occupancy: Vec<Option<Player>>,
    pub current_player: Player,
    /// Last applied rotation, consulted by the anti-undo rule
    pub last_move: Option<Move>,
    pub score_white: u32,
    pub score_black: u32,
}

impl GameState {
    /// Starting position: White to move, stones from the ring-kind rule
    pub fn new(topology: &Topology) -> Self {
        let occupancy = topology
            .points
            .iter()
            .map(|point| match point.rings.as_slice() {
                &[a, b] => {
                    let same_kind = topology.rings[a].kind == topology.rings[b].kind;
                    Some(if same_kind { Player::White } else { Player::Black })
                }
                _ => None,
            })
            .collect();

        Self {
            occupancy,
            current_player: Player::White,
            last_move: None,
            score_white: 0,
            score_black: 0,
        }
    }

    pub fn stone(&self, point: PointId) -> Option<Player> {
        self.occupancy.get(point).copied().flatten()
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::White => self.score_white,
            Player::Black => self.score_black,
        }
    }

    pub(crate) fn award(&mut self, player: Player) {
        match player {
            Player::White => self.score_white += 1,
            Player::Black => self.score_black += 1,
        }
    }

    /// Number of stones of `player` on the board
    pub fn stones(&self, player: Player) -> usize {
        self.occupancy.iter().filter(|s| **s == Some(player)).count()
    }

    pub fn empty_points(&self) -> usize {
        self.occupancy.iter().filter(|s| s.is_none()).count()
    }
}
