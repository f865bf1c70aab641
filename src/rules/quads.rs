//! Scoring groups ("quads")
//!
//! Every pair of major positions owns the cluster of points whose rings
//! belong to exactly those two positions. A cluster is cut into groups of
//! four by proximity: the first remaining point seeds a group and takes its
//! three nearest neighbours, and the rest stay in distance order so the next
//! seed is the closest point not yet taken. Clusters start in point id
//! order. Leftovers smaller than a group are dead points that never score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::topology::{Point, PointId, Topology};
use crate::consts::{MAJOR_POSITIONS, QUAD_COUNT, QUAD_SIZE};
use crate::error::{Error, Result};

/// Four points that score when they all hold the same color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad {
    pub points: [PointId; QUAD_SIZE],
    /// The pair of major positions this quad was cut from
    pub majors: (usize, usize),
}

impl Quad {
    #[cfg(test)]
    pub fn contains(&self, point: PointId) -> bool {
        self.points.contains(&point)
    }

    /// Point ids in ascending order, the quad's identity for dedup
    pub fn sorted_points(&self) -> [PointId; QUAD_SIZE] {
        let mut ids = self.points;
        ids.sort_unstable();
        ids
    }
}

/// Derive the quad list. The returned order is the resolution order.
pub fn enumerate_quads(topology: &Topology) -> Result<Vec<Quad>> {
    let mut quads = Vec::new();

    for i in 0..MAJOR_POSITIONS {
        for j in i + 1..MAJOR_POSITIONS {
            let cluster: Vec<&Point> = topology
                .points
                .iter()
                .filter(|p| {
                    let majors = p.majors();
                    majors.len() == 2 && majors.contains(&i) && majors.contains(&j)
                })
                .collect();
            partition_cluster(cluster, (i, j), &mut quads);
        }
    }

    dedup(&mut quads);
    validate(topology, &quads)?;
    if quads.len() != QUAD_COUNT {
        return Err(Error::UnexpectedCount {
            what: "quads",
            expected: QUAD_COUNT,
            actual: quads.len(),
        });
    }
    Ok(quads)
}

fn partition_cluster(mut remaining: Vec<&Point>, majors: (usize, usize), quads: &mut Vec<Quad>) {
    while remaining.len() >= QUAD_SIZE {
        let seed = remaining.remove(0);
        remaining.sort_by(|a, b| {
            seed.pos
                .distance(a.pos)
                .total_cmp(&seed.pos.distance(b.pos))
                .then(a.id.cmp(&b.id))
        });
        let rest = remaining.split_off(QUAD_SIZE - 1);
        quads.push(Quad {
            points: [seed.id, remaining[0].id, remaining[1].id, remaining[2].id],
            majors,
        });
        remaining = rest;
    }

    if !remaining.is_empty() {
        log::debug!(
            "Majors {:?}: {} point(s) left outside any quad",
            majors,
            remaining.len()
        );
    }
}

fn dedup(quads: &mut Vec<Quad>) {
    let mut seen = HashSet::new();
    quads.retain(|q| seen.insert(q.sorted_points()));
}

fn validate(topology: &Topology, quads: &[Quad]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, quad) in quads.iter().enumerate() {
        let ids = quad.sorted_points();
        let distinct = ids.windows(2).all(|w| w[0] != w[1]);
        let known = ids.iter().all(|&p| p < topology.point_count());
        if !distinct || !known {
            return Err(Error::MalformedQuad {
                index,
                points: quad.points.to_vec(),
            });
        }
        if !seen.insert(ids) {
            return Err(Error::DuplicateQuad { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_BOARD_SCALE;
    use crate::rules::topology::PointKey;
    use glam::Vec2;

    fn quads() -> (Topology, Vec<Quad>) {
        let topo = Topology::build(DEFAULT_BOARD_SCALE).unwrap();
        let quads = enumerate_quads(&topo).unwrap();
        (topo, quads)
    }

    fn fake_point(id: PointId, x: f32, y: f32) -> Point {
        let pos = Vec2::new(x, y);
        Point {
            id,
            key: PointKey::quantize(pos),
            pos,
            rings: vec![0, 2],
        }
    }

    #[test]
    fn test_quad_count() {
        let (_, quads) = quads();
        assert_eq!(quads.len(), 20);
        for i in 0..MAJOR_POSITIONS {
            for j in i + 1..MAJOR_POSITIONS {
                assert_eq!(quads.iter().filter(|q| q.majors == (i, j)).count(), 2);
            }
        }
    }

    #[test]
    fn test_quads_are_distinct_and_disjoint() {
        let (topo, quads) = quads();
        let mut used = HashSet::new();
        for quad in &quads {
            for &p in &quad.points {
                assert!(p < topo.point_count());
                assert!(used.insert(p), "point {p} in two quads");
            }
        }
        // Every point belongs to exactly one quad on this board
        assert_eq!(used.len(), topo.point_count());
    }

    #[test]
    fn test_quad_points_span_its_majors() {
        let (topo, quads) = quads();
        for quad in &quads {
            let (i, j) = quad.majors;
            for &p in &quad.points {
                let majors: Vec<usize> = topo.points[p].majors().into_iter().collect();
                assert_eq!(majors, vec![i, j]);
            }
        }
    }

    #[test]
    fn test_quads_are_compact() {
        // Each quad is a tight group: all members closer to each other than
        // to the other quad of the same cluster.
        let (topo, quads) = quads();
        for quad in &quads {
            let spread = quad
                .points
                .iter()
                .flat_map(|&a| quad.points.iter().map(move |&b| (a, b)))
                .map(|(a, b)| topo.points[a].pos.distance(topo.points[b].pos))
                .fold(0.0_f32, f32::max);
            for other in quads.iter().filter(|o| o.majors == quad.majors && *o != quad) {
                for &a in &quad.points {
                    for &b in &other.points {
                        assert!(topo.points[a].pos.distance(topo.points[b].pos) > spread);
                    }
                }
            }
        }
    }

    #[test]
    fn test_partition_groups_nearest_and_drops_leftovers() {
        let points = vec![
            fake_point(0, 0.0, 0.0),
            fake_point(1, 100.0, 0.0),
            fake_point(2, 1.0, 0.0),
            fake_point(3, 101.0, 0.0),
            fake_point(4, 0.0, 1.0),
            fake_point(5, 100.0, 1.0),
            fake_point(6, 1.0, 1.0),
            fake_point(7, 101.0, 1.0),
            fake_point(8, 500.0, 500.0),
        ];
        let mut out = Vec::new();
        partition_cluster(points.iter().collect(), (0, 1), &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].sorted_points(), [0, 2, 4, 6]);
        assert_eq!(out[1].sorted_points(), [1, 3, 5, 7]);
        assert!(out.iter().all(|q| !q.contains(8)));
    }

    #[test]
    fn test_short_cluster_fails_quad_count() {
        let mut topo = Topology::build(DEFAULT_BOARD_SCALE).unwrap();
        // Pin one point to a single major so its cluster is a point short
        topo.points[0].rings = vec![0, 1];
        assert!(matches!(
            enumerate_quads(&topo),
            Err(Error::UnexpectedCount { what: "quads", expected: 20, actual: 19 })
        ));
    }

    #[test]
    fn test_dedup_ignores_point_order() {
        let mut list = vec![
            Quad { points: [1, 2, 3, 4], majors: (0, 1) },
            Quad { points: [4, 3, 2, 1], majors: (0, 1) },
            Quad { points: [1, 2, 3, 5], majors: (0, 1) },
        ];
        dedup(&mut list);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].points, [1, 2, 3, 4]);
    }

    #[test]
    fn test_validate_rejects_bad_quads() {
        let topo = Topology::build(DEFAULT_BOARD_SCALE).unwrap();
        let repeated = [Quad { points: [1, 1, 2, 3], majors: (0, 1) }];
        assert!(matches!(validate(&topo, &repeated), Err(Error::MalformedQuad { .. })));
        let unknown = [Quad { points: [1, 2, 3, 999], majors: (0, 1) }];
        assert!(matches!(validate(&topo, &unknown), Err(Error::MalformedQuad { .. })));
        let twice = [
            Quad { points: [1, 2, 3, 4], majors: (0, 1) },
            Quad { points: [2, 1, 4, 3], majors: (0, 1) },
        ];
        assert!(matches!(validate(&topo, &twice), Err(Error::DuplicateQuad { index: 1 })));
    }
}
