//! Shortest-path engine for road-network routing
//!
//! Contains a directed, weighted graph model keyed by loader-assigned
//! node ids, a traffic-aware edge cost function, uniform-cost and
//! heuristic-guided searches, and nearest-node lookup for snapping raw
//! coordinates onto the network.
//!
//! The graph is built incrementally through [`RoadGraph::add_node`] and
//! [`RoadGraph::add_edge`], then treated as read-only for the lifetime
//! of all queries. Concurrent read-only queries against a shared graph
//! are safe; each query owns its own [`TrafficMap`].

pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod spatial;

pub use error::Error;
pub use model::{RoadEdge, RoadGraph};
pub use routing::{
    CancelToken, Route, TrafficMap, astar, astar_with_cancel, astar_with_speed, dijkstra,
    dijkstra_with_cancel, edge_cost,
};
pub use spatial::{SpatialIndex, find_nearest_node, haversine_distance};

/// Node identifier, as assigned by the external network loader.
pub type NodeId = i64;

/// Travel time in seconds.
pub type Time = f64;

/// Mean Earth radius in meters, used by all great-circle math.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Average speed assumed by the heuristic search when estimating the
/// remaining travel time, in meters per second (~50 km/h).
pub const DEFAULT_FREE_FLOW_SPEED: f64 = 13.9;
