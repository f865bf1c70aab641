//! Board topology: rings, intersection points and ring membership
//!
//! Built once per session from the board scale. Intersections are quantized
//! onto a unit grid ([`GRID_UNIT`]) so that several ring pairs crossing at the
//! same physical spot collapse into a single point.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::{major_angle, polar_to_cartesian};

pub type RingId = usize;
pub type PointId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingKind {
    Inner,
    Outer,
}

/// One of the rotatable rings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub id: RingId,
    /// Major position this ring belongs to (shared with its sibling)
    pub major: usize,
    pub kind: RingKind,
    pub circle: Circle,
}

/// Quantized coordinates of an intersection.
///
/// Ordered row-major (y, then x), which fixes point id assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointKey {
    pub x: i32,
    pub y: i32,
}

impl PointKey {
    /// Round a working-space position to the nearest grid cell
    pub fn quantize(pos: Vec2) -> Self {
        Self {
            x: (pos.x / GRID_UNIT).round() as i32,
            y: (pos.y / GRID_UNIT).round() as i32,
        }
    }
}

impl Ord for PointKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for PointKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A stone position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub key: PointKey,
    /// First raw intersection that produced this key
    pub pos: Vec2,
    /// Rings through this point, ascending
    pub rings: Vec<RingId>,
}

impl Point {
    pub fn on_ring(&self, ring: RingId) -> bool {
        self.rings.contains(&ring)
    }

    /// Distinct major positions of the rings through this point
    pub fn majors(&self) -> BTreeSet<usize> {
        self.rings.iter().map(|r| r / RINGS_PER_POSITION).collect()
    }
}

/// Immutable board geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    pub scale: f32,
    pub rings: Vec<Ring>,
    pub points: Vec<Point>,
    /// Per ring, its points ordered by ascending angle around the ring center
    ring_points: Vec<Vec<PointId>>,
}

/// Reject scales the unit grid cannot represent faithfully
pub fn check_scale(scale: f32) -> Result<()> {
    if !scale.is_finite() || !(MIN_BOARD_SCALE..=MAX_BOARD_SCALE).contains(&scale) {
        return Err(Error::InvalidScale {
            scale,
            min: MIN_BOARD_SCALE,
            max: MAX_BOARD_SCALE,
        });
    }
    Ok(())
}

impl Topology {
    /// Build the ring layout and its intersection points for a board scale
    pub fn build(scale: f32) -> Result<Self> {
        check_scale(scale)?;

        let rings = build_rings(scale);
        let points = build_points(&rings);
        let ring_points = rings
            .iter()
            .map(|ring| {
                let mut on_ring: Vec<&Point> = points.iter().filter(|p| p.on_ring(ring.id)).collect();
                on_ring.sort_by(|a, b| ring.circle.angle_of(a.pos).total_cmp(&ring.circle.angle_of(b.pos)));
                on_ring.into_iter().map(|p| p.id).collect()
            })
            .collect();

        let topology = Self {
            scale,
            rings,
            points,
            ring_points,
        };
        topology.validate()?;
        Ok(topology)
    }

    fn validate(&self) -> Result<()> {
        if self.rings.len() != RING_COUNT {
            return Err(Error::RingCount {
                expected: RING_COUNT,
                actual: self.rings.len(),
            });
        }
        if self.points.len() != POINT_COUNT {
            return Err(Error::UnexpectedCount {
                what: "points",
                expected: POINT_COUNT,
                actual: self.points.len(),
            });
        }
        if let Some(on_ring) = self.ring_points.iter().find(|p| p.len() != POINTS_PER_RING) {
            return Err(Error::UnexpectedCount {
                what: "points on a ring",
                expected: POINTS_PER_RING,
                actual: on_ring.len(),
            });
        }
        for point in &self.points {
            if point.rings.len() < 2 {
                return Err(Error::UnderconnectedPoint {
                    point: point.id,
                    rings: point.rings.len(),
                });
            }
            if let Some(&ring) = point.rings.iter().find(|&&r| r >= self.rings.len()) {
                return Err(Error::UnknownRing { point: point.id, ring });
            }
        }
        Ok(())
    }

    pub fn ring(&self, id: RingId) -> Option<&Ring> {
        self.rings.get(id)
    }

    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id)
    }

    /// Points on `ring` in rotation order (ascending angle). Empty for unknown rings.
    pub fn points_on_ring(&self, ring: RingId) -> &[PointId] {
        self.ring_points.get(ring).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

fn build_rings(scale: f32) -> Vec<Ring> {
    let center = Vec2::splat(scale / 2.0);
    let major_radius = scale * MAJOR_RADIUS_RATIO;

    (0..MAJOR_POSITIONS)
        .flat_map(|major| {
            let ring_center = polar_to_cartesian(center, major_radius, major_angle(major));
            [
                (RingKind::Inner, INNER_RADIUS_RATIO),
                (RingKind::Outer, OUTER_RADIUS_RATIO),
            ]
            .into_iter()
            .enumerate()
            .map(move |(offset, (kind, ratio))| Ring {
                id: major * RINGS_PER_POSITION + offset,
                major,
                kind,
                circle: Circle::new(ring_center, scale * ratio),
            })
        })
        .collect()
}

fn build_points(rings: &[Ring]) -> Vec<Point> {
    let mut merged: BTreeMap<PointKey, (Vec2, BTreeSet<RingId>)> = BTreeMap::new();

    for (i, a) in rings.iter().enumerate() {
        for b in &rings[i + 1..] {
            let Some(hits) = a.circle.intersect(&b.circle) else {
                continue;
            };
            for pos in hits {
                let (_, members) = merged
                    .entry(PointKey::quantize(pos))
                    .or_insert_with(|| (pos, BTreeSet::new()));
                members.insert(a.id);
                members.insert(b.id);
            }
        }
    }

    merged
        .into_iter()
        .enumerate()
        .map(|(id, (key, (pos, members)))| Point {
            id,
            key,
            pos,
            rings: members.into_iter().collect(),
        })
        .collect()
}
