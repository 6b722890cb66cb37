use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::{HashMap, hash_map::Entry};
use log::trace;

use super::{CancelToken, Route, TrafficMap, edge_cost, reconstruct_path, validate_endpoints};
use crate::model::RoadGraph;
use crate::{Error, NodeId, Time};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Time,
    node: NodeId,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); exact-cost
// ties settle in ascending node id order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search for the minimum-total-time route from `source`
/// to `target` under the supplied traffic conditions.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if either endpoint is absent from the
/// graph, and [`Error::NoPathFound`] if no edge path reaches the target.
pub fn dijkstra(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
) -> Result<Route, Error> {
    run(graph, source, target, traffic, None)
}

/// Same as [`dijkstra`], checking `cancel` at every queue pop.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] once the token is triggered, in addition
/// to the [`dijkstra`] failure modes.
pub fn dijkstra_with_cancel(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
    cancel: &CancelToken,
) -> Result<Route, Error> {
    run(graph, source, target, traffic, Some(cancel))
}

fn run(
    graph: &RoadGraph,
    source: NodeId,
    target: NodeId,
    traffic: Option<&TrafficMap>,
    cancel: Option<&CancelToken>,
) -> Result<Route, Error> {
    validate_endpoints(graph, source, target)?;

    if source == target {
        return Ok(Route {
            total_time: 0.0,
            nodes: vec![source],
        });
    }

    let mut distances: HashMap<NodeId, Time> = HashMap::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Source has distance 0
    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        // Non-negative edge costs make the first pop of the target final
        if node == target {
            break;
        }

        // Skip entries superseded by a better path found after queueing
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.neighbors(node) {
            let next_cost = cost + edge_cost(edge, node, traffic);

            match distances.entry(edge.target) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(edge.target, node);
                    heap.push(State {
                        cost: next_cost,
                        node: edge.target,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(edge.target, node);
                        heap.push(State {
                            cost: next_cost,
                            node: edge.target,
                        });
                    }
                }
            }
        }
    }

    trace!(
        "dijkstra {source} -> {target}: labeled {} nodes",
        distances.len()
    );

    match distances.get(&target) {
        Some(&total_time) if predecessors.contains_key(&target) => Ok(Route {
            total_time,
            nodes: reconstruct_path(&predecessors, source, target),
        }),
        _ => Err(Error::NoPathFound { source, target }),
    }
}
