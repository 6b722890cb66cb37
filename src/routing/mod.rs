//! Shortest-path searches over the road graph

pub mod astar;
pub mod cost;
pub mod dijkstra;

pub use astar::{astar, astar_with_cancel, astar_with_speed};
pub use cost::{TrafficMap, edge_cost};
pub use dijkstra::{dijkstra, dijkstra_with_cancel};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::RoadGraph;
use crate::{Error, NodeId, Time};

/// Computed route between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Total travel time in seconds under the queried traffic conditions
    pub total_time: Time,
    /// Traversed node ids, source and target inclusive
    pub nodes: Vec<NodeId>,
}

/// Cooperative cancellation flag for long-running searches.
///
/// Cloning shares the underlying flag, so any clone can cancel. Searches
/// check the flag once per priority-queue pop and fail with
/// [`Error::Cancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Check that both query endpoints are part of the graph.
pub(crate) fn validate_endpoints(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
) -> Result<(), Error> {
    for id in [source, target] {
        if !graph.contains(id) {
            return Err(Error::UnknownNode(id));
        }
    }
    Ok(())
}

/// Follow predecessor links backward from `target`, then reverse into a
/// source-to-target sequence. Callers guarantee a recorded chain exists.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if let Some(&prev) = predecessors.get(&current) {
            path.push(prev);
            current = prev;
        } else {
            break;
        }
    }

    path.reverse();
    path
}
