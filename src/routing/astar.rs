use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::{HashMap, hash_map::Entry};
use log::trace;

use super::{CancelToken, Route, TrafficMap, edge_cost, reconstruct_path, validate_endpoints};
use crate::model::RoadGraph;
use crate::spatial::haversine_distance;
use crate::{DEFAULT_FREE_FLOW_SPEED, Error, NodeId, Time};

#[derive(Copy, Clone, PartialEq)]
struct State {
    /// Accumulated cost plus the remaining-time estimate
    estimate: Time,
    /// Accumulated real cost
    cost: Time,
    node: NodeId,
}

impl Eq for State {}

// Min-heap by estimate (reversed from standard Rust BinaryHeap);
// exact-estimate ties settle in ascending node id order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Heuristic-guided search for the minimum-total-time route from
/// `source` to `target` under the supplied traffic conditions.
///
/// Pending nodes are ordered by accumulated cost plus an estimate of the
/// remaining time: great-circle distance to the target divided by
/// [`DEFAULT_FREE_FLOW_SPEED`]. The estimate never exceeds the real
/// remaining time as long as every traffic multiplier is `>= 1.0`, which
/// is what guarantees a minimum-cost result. A multiplier below `1.0`
/// can make some edge cheaper than its free-flow estimate, and the
/// search may then return a more expensive route than [`dijkstra`].
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if either endpoint is absent from the
/// graph or a reached node has no registered coordinate, and
/// [`Error::NoPathFound`] if no edge path reaches the target.
pub fn astar(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
) -> Result<Route, Error> {
    run(graph, source, target, traffic, DEFAULT_FREE_FLOW_SPEED, None)
}

/// Same as [`astar`] with a custom assumed average speed in meters per
/// second. Higher speeds weaken the estimate toward uniform-cost
/// behavior; speeds above the network's real average keep it admissible.
/// `average_speed` must be positive.
pub fn astar_with_speed(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
    average_speed: f64,
) -> Result<Route, Error> {
    run(graph, source, target, traffic, average_speed, None)
}

/// Same as [`astar`], checking `cancel` at every queue pop.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] once the token is triggered, in addition
/// to the [`astar`] failure modes.
pub fn astar_with_cancel(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
    cancel: &CancelToken,
) -> Result<Route, Error> {
    run(
        graph,
        source,
        target,
        traffic,
        DEFAULT_FREE_FLOW_SPEED,
        Some(cancel),
    )
}

fn run(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
    average_speed: f64,
    cancel: Option<&CancelToken>,
) -> Result<Route, Error> {
    debug_assert!(average_speed > 0.0);
    validate_endpoints(graph, source, target)?;

    if source == target {
        return Ok(Route {
            total_time: 0.0,
            nodes: vec![source],
        });
    }

    let goal = graph.coord(target)?;
    let remaining = |node: NodeId| -> Result<Time, Error> {
        Ok(haversine_distance(graph.coord(node)?, goal) / average_speed)
    };

    let mut best: HashMap<NodeId, Time> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        estimate: remaining(source)?,
        cost: 0.0,
        node: source,
    });
    best.insert(source, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        if node == target {
            break;
        }

        // Skip entries superseded by a better path found after queueing
        if let Some(&known) = best.get(&node) {
            if cost > known {
                continue;
            }
        }

        for edge in graph.neighbors(node) {
            let next_cost = cost + edge_cost(edge, node, traffic);

            match best.entry(edge.target) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(edge.target, node);
                    heap.push(State {
                        estimate: next_cost + remaining(edge.target)?,
                        cost: next_cost,
                        node: edge.target,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(edge.target, node);
                        heap.push(State {
                            estimate: next_cost + remaining(edge.target)?,
                            cost: next_cost,
                            node: edge.target,
                        });
                    }
                }
            }
        }
    }

    trace!("astar {source} -> {target}: labeled {} nodes", best.len());

    match best.get(&target) {
        Some(&total_time) if predecessors.contains_key(&target) => Ok(Route {
            total_time,
            nodes: reconstruct_path(&predecessors, source, target),
        }),
        _ => Err(Error::NoPathFound { source, target }),
    }
}
