// Re-export key components
pub use crate::error::Error;
pub use crate::model::{RoadEdge, RoadGraph};
pub use crate::routing::{
    CancelToken, Route, TrafficMap, astar, astar_with_cancel, astar_with_speed, dijkstra,
    dijkstra_with_cancel, edge_cost,
};
pub use crate::spatial::{SpatialIndex, find_nearest_node, haversine_distance};

// Core scalar types and constants
pub use crate::{DEFAULT_FREE_FLOW_SPEED, EARTH_RADIUS_M, NodeId, Time};
