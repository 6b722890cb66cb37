//! Directed road graph keyed by loader-assigned node ids

use geo::{Point, Rect};
use hashbrown::HashMap;
use itertools::Itertools;

use super::RoadEdge;
use crate::{Error, NodeId, Time};

/// Directed, weighted road network.
///
/// Nodes carry geographic coordinates; every node owns the list of its
/// outgoing edges, in insertion order. The graph is built once through
/// the append-only construction methods and stays logically frozen while
/// queries run against it.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    /// node id -> (x = longitude, y = latitude), decimal degrees
    coords: HashMap<NodeId, Point<f64>>,
    /// node id -> outgoing edges
    adjacency: HashMap<NodeId, Vec<RoadEdge>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` at the given position, overwriting any previously
    /// stored coordinate. New nodes get an empty adjacency entry.
    pub fn add_node(&mut self, id: NodeId, lat: f64, lon: f64) {
        self.adjacency.entry(id).or_default();
        self.coords.insert(id, Point::new(lon, lat));
    }

    /// Appends a directed segment `u -> v`, plus the mirrored `v -> u`
    /// with the same cost and name when `bidirectional`.
    ///
    /// Adjacency entries are created for both endpoints as needed;
    /// coordinates are not. Callers register coordinates through
    /// [`RoadGraph::add_node`], or coordinate-dependent queries against
    /// these nodes fail with [`Error::UnknownNode`]. `base_time` must be
    /// non-negative.
    pub fn add_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        base_time: Time,
        road_name: Option<&str>,
        bidirectional: bool,
    ) {
        self.adjacency.entry(v).or_default();
        self.adjacency.entry(u).or_default().push(RoadEdge {
            target: v,
            base_time,
            road_name: road_name.map(str::to_owned),
        });

        if bidirectional {
            self.adjacency.entry(v).or_default().push(RoadEdge {
                target: u,
                base_time,
                road_name: road_name.map(str::to_owned),
            });
        }
    }

    /// Outgoing edges of `u`, empty when `u` has none.
    pub fn neighbors(&self, u: NodeId) -> &[RoadEdge] {
        self.adjacency.get(&u).map_or(&[], Vec::as_slice)
    }

    /// Position of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` has no registered coordinate.
    pub fn coord(&self, id: NodeId) -> Result<Point<f64>, Error> {
        self.coords.get(&id).copied().ok_or(Error::UnknownNode(id))
    }

    /// Whether `id` is part of the graph (registered or referenced by an edge).
    pub fn contains(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All nodes with registered coordinates, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Point<f64>)> + '_ {
        self.coords.iter().map(|(&id, &point)| (id, point))
    }

    /// Every directed edge, paired with its source node. Intended for
    /// consumers rendering the full network.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &RoadEdge)> {
        self.adjacency
            .iter()
            .flat_map(|(&u, edges)| edges.iter().map(move |edge| (u, edge)))
    }

    /// Geographic extent of all registered coordinates, or `None` for a
    /// graph without any.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let (min_x, max_x) = self.coords.values().map(|p| p.x()).minmax().into_option()?;
        let (min_y, max_y) = self.coords.values().map(|p| p.y()).minmax().into_option()?;
        Some(Rect::new((min_x, min_y), (max_x, max_y)))
    }
}
