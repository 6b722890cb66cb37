//! R-tree accelerated nearest-node lookup

use std::cmp::Ordering;

use geo::Point;
use log::debug;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::model::RoadGraph;
use crate::{Error, NodeId};

/// Graph node positioned on the unit sphere.
///
/// Chord distance between unit vectors grows strictly with great-circle
/// distance, so the tree's nearest neighbor is exactly the haversine
/// nearest neighbor.
#[derive(Debug, Clone, Copy)]
struct IndexedNode {
    id: NodeId,
    position: [f64; 3],
}

impl RTreeObject for IndexedNode {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedNode {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        self.position
            .iter()
            .zip(point)
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// Precomputed nearest-node index over a frozen graph.
///
/// Answers the same queries as [`crate::spatial::find_nearest_node`],
/// with the same metric and the same smallest-id tie rule, in
/// logarithmic instead of linear time.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: RTree<IndexedNode>,
}

impl SpatialIndex {
    /// Builds the index from every registered coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] if no node has a coordinate.
    pub fn build(graph: &RoadGraph) -> Result<Self, Error> {
        let nodes: Vec<IndexedNode> = graph
            .nodes()
            .map(|(id, point)| IndexedNode {
                id,
                position: unit_vector(point),
            })
            .collect();

        if nodes.is_empty() {
            return Err(Error::EmptyGraph);
        }

        debug!("indexed {} nodes for nearest-node lookup", nodes.len());

        Ok(Self {
            tree: RTree::bulk_load(nodes),
        })
    }

    /// Node closest to the query point by great-circle distance.
    ///
    /// `None` only for an index over zero nodes, which [`SpatialIndex::build`]
    /// never produces.
    pub fn nearest(&self, lat: f64, lon: f64) -> Option<NodeId> {
        let query = unit_vector(Point::new(lon, lat));
        let mut best: Option<(f64, NodeId)> = None;

        // Candidates come back in ascending chord distance; walk the
        // leading equal-distance run and keep the smallest id.
        for (node, distance_2) in self.tree.nearest_neighbor_iter_with_distance_2(&query) {
            match best {
                None => best = Some((distance_2, node.id)),
                Some((best_distance_2, best_id)) => {
                    if distance_2.total_cmp(&best_distance_2) == Ordering::Greater {
                        break;
                    }
                    if node.id < best_id {
                        best = Some((best_distance_2, node.id));
                    }
                }
            }
        }

        best.map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// Unit-sphere position of a (longitude, latitude) point.
fn unit_vector(point: Point<f64>) -> [f64; 3] {
    let phi = point.y().to_radians();
    let lambda = point.x().to_radians();

    [
        phi.cos() * lambda.cos(),
        phi.cos() * lambda.sin(),
        phi.sin(),
    ]
}
