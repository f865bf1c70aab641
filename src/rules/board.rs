//! Immutable board: topology plus the quad list derived from it

use serde::{Deserialize, Serialize};

use super::quads::{Quad, enumerate_quads};
use super::topology::Topology;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub topology: Topology,
    /// Fixed resolution order for quad evaluation
    pub quads: Vec<Quad>,
}

impl Board {
    pub fn build(scale: f32) -> Result<Self> {
        let topology = Topology::build(scale)?;
        let quads = enumerate_quads(&topology)?;
        log::info!(
            "Board built at scale {}: {} rings, {} points, {} quads",
            scale,
            topology.rings.len(),
            topology.point_count(),
            quads.len()
        );
        Ok(Self { topology, quads })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BOARD_SCALE, POINT_COUNT, QUAD_COUNT};
    use crate::error::Error;

    #[test]
    fn test_builds_reference_board_up_to_max_scale() {
        let board = Board::build(MAX_BOARD_SCALE).unwrap();
        assert_eq!(board.topology.point_count(), POINT_COUNT);
        assert_eq!(board.quads.len(), QUAD_COUNT);
    }

    #[test]
    fn test_huge_scale_is_an_error() {
        for scale in [5e9, 1e10, 1e30] {
            assert!(matches!(Board::build(scale), Err(Error::InvalidScale { .. })));
        }
    }
}
