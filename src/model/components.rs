//! Road network components - directed edges between graph nodes

use serde::{Deserialize, Serialize};

use crate::{NodeId, Time};

/// Directed road segment leaving a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadEdge {
    /// Node this segment leads to
    pub target: NodeId,
    /// Travel time in seconds under free-flow conditions
    pub base_time: Time,
    /// Street name for display, when known. Not used in cost computation.
    pub road_name: Option<String>,
}
