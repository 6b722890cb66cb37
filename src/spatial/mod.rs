//! Great-circle distance and nearest-node lookup
//!
//! Snapping a raw coordinate onto the network goes through
//! [`find_nearest_node`], an exhaustive scan that defines the lookup
//! contract: minimum haversine distance, exact ties resolved to the
//! smallest node id. [`SpatialIndex`] answers the same queries from an
//! R-tree and is the better fit for repeated lookups on large graphs.

pub mod index;

pub use index::SpatialIndex;

use std::cmp::Ordering;

use geo::Point;

use crate::model::RoadGraph;
use crate::{EARTH_RADIUS_M, Error, NodeId};

/// Great-circle distance between two points in meters.
///
/// Standard haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
/// Points are (x = longitude, y = latitude) in decimal degrees.
pub fn haversine_distance(from: Point<f64>, to: Point<f64>) -> f64 {
    let phi1 = from.y().to_radians();
    let phi2 = to.y().to_radians();
    let dphi = (to.y() - from.y()).to_radians();
    let dlambda = (to.x() - from.x()).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Node closest to the query point by great-circle distance.
///
/// Scans every registered coordinate, O(n) per call. Exact-distance ties
/// resolve to the smallest node id, independent of map iteration order.
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`] if no node has a registered coordinate.
pub fn find_nearest_node(graph: &RoadGraph, lat: f64, lon: f64) -> Result<NodeId, Error> {
    let query = Point::new(lon, lat);
    let mut best: Option<(f64, NodeId)> = None;

    for (id, point) in graph.nodes() {
        let distance = haversine_distance(query, point);

        let closer = match best {
            None => true,
            Some((best_distance, best_id)) => match distance.total_cmp(&best_distance) {
                Ordering::Less => true,
                Ordering::Equal => id < best_id,
                Ordering::Greater => false,
            },
        };

        if closer {
            best = Some((distance, id));
        }
    }

    best.map(|(_, id)| id).ok_or(Error::EmptyGraph)
}
