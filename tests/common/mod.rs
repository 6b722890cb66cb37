use viator::{NodeId, RoadGraph, Time};

const BASE_LAT: f64 = 39.36;
const BASE_LON: f64 = -74.42;
/// ~111 m of latitude per step
const STEP: f64 = 0.001;

/// Four-node network from a city block: a three-hop chain 1 -> 2 -> 3 -> 4
/// next to a more expensive direct road 1 -> 3. All edges are one-way.
///
/// Best route 1 -> 4 is [1, 2, 3, 4] at 25 seconds; the direct road
/// totals 30. Nodes sit meters apart so the remaining-time estimate stays
/// far below every edge cost.
pub fn shortcut_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();

    graph.add_node(1, BASE_LAT, BASE_LON);
    graph.add_node(2, BASE_LAT + 0.00001, BASE_LON + 0.00001);
    graph.add_node(3, BASE_LAT + 0.00002, BASE_LON + 0.00002);
    graph.add_node(4, BASE_LAT + 0.00003, BASE_LON + 0.00003);

    graph.add_edge(1, 2, 10.0, Some("Atlantic Ave"), false);
    graph.add_edge(2, 3, 10.0, Some("Atlantic Ave"), false);
    graph.add_edge(1, 3, 25.0, Some("Pacific Ave"), false);
    graph.add_edge(3, 4, 5.0, None, false);

    graph
}

/// Rectangular street grid with two-way segments, nodes numbered
/// row-major from 1. Segment times vary deterministically between 10 and
/// 16 seconds, always above the ~8 s free-flow time of a ~110 m step, so
/// the heuristic search's estimate stays admissible.
pub fn grid_graph(width: i64, height: i64) -> RoadGraph {
    let mut graph = RoadGraph::new();

    for row in 0..height {
        for col in 0..width {
            let id = row * width + col + 1;
            graph.add_node(
                id,
                BASE_LAT + row as f64 * STEP,
                BASE_LON + col as f64 * STEP,
            );
        }
    }

    for row in 0..height {
        for col in 0..width {
            let id = row * width + col + 1;
            if col + 1 < width {
                graph.add_edge(id, id + 1, segment_time(id, id + 1), None, true);
            }
            if row + 1 < height {
                graph.add_edge(id, id + width, segment_time(id, id + width), None, true);
            }
        }
    }

    graph
}

fn segment_time(u: NodeId, v: NodeId) -> Time {
    10.0 + ((u * 31 + v * 17) % 7) as Time
}
