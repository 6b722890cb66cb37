//! Edge traversal cost under optional traffic conditions

use hashbrown::HashMap;

use crate::model::RoadEdge;
use crate::{NodeId, Time};

/// Query-scoped congestion multipliers keyed by directed node pair.
///
/// Pairs absent from the map default to a multiplier of `1.0`. Realistic
/// congestion only produces multipliers `>= 1.0`; smaller values are
/// representable and not clamped, but they void the admissibility of the
/// heuristic search's estimate (see [`crate::routing::astar`]).
pub type TrafficMap = HashMap<(NodeId, NodeId), f64>;

/// Cost in seconds of traversing `edge` out of node `from`.
pub fn edge_cost(edge: &RoadEdge, from: NodeId, traffic: Option<&TrafficMap>) -> Time {
    match traffic {
        Some(map) => {
            let factor = map.get(&(from, edge.target)).copied().unwrap_or(1.0);
            edge.base_time * factor
        }
        None => edge.base_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_to(target: NodeId, base_time: Time) -> RoadEdge {
        RoadEdge {
            target,
            base_time,
            road_name: None,
        }
    }

    #[test]
    fn base_time_without_traffic() {
        assert_eq!(edge_cost(&edge_to(2, 30.0), 1, None), 30.0);
    }

    #[test]
    fn multiplier_applies_to_matching_pair_only() {
        let mut traffic = TrafficMap::new();
        traffic.insert((1, 2), 2.5);

        assert_eq!(edge_cost(&edge_to(2, 30.0), 1, Some(&traffic)), 75.0);
        // reverse direction is a different pair
        assert_eq!(edge_cost(&edge_to(1, 30.0), 2, Some(&traffic)), 30.0);
        assert_eq!(edge_cost(&edge_to(3, 30.0), 1, Some(&traffic)), 30.0);
    }

    #[test]
    fn empty_map_defaults_to_base_time() {
        let traffic = TrafficMap::new();
        assert_eq!(edge_cost(&edge_to(2, 30.0), 1, Some(&traffic)), 30.0);
    }
}
