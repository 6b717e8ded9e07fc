//! Routing trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The planner calls routing via the [`Router`] trait, so alternative
//! engines (bidirectional search, contraction hierarchies, test doubles)
//! can be swapped in without touching the planner.  [`AStarRouter`] is the
//! production engine.
//!
//! # Cost model
//!
//! Edge cost is the precomputed great-circle length of the edge in miles;
//! the heuristic is the great-circle distance to the destination, which
//! lower-bounds any remaining road distance, so A* returns exact shortest
//! paths under this metric.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use courier_core::{crow_miles, CourierError, CourierResult, EdgeId, GeoCoord, NodeId, StreetSegment};

use crate::network::StreetMap;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: contiguous street segments from origin to
/// destination, plus their summed great-circle length.
#[derive(Debug, Clone)]
pub struct Route {
    /// Segments to traverse in order.  Empty when origin == destination.
    pub segments: Vec<StreetSegment>,
    /// Total length in miles; 0.0 for the empty route.
    pub miles: f64,
}

impl Route {
    /// `true` if the origin and destination are the same coordinate.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable point-to-point routing engine.
pub trait Router {
    /// Compute the shortest drivable route between two coordinates.
    ///
    /// # Errors
    ///
    /// [`CourierError::BadCoord`] if either endpoint is not a key of the
    /// map; [`CourierError::NoRoute`] if the search exhausts every
    /// reachable node without finding `end`.
    fn route(&self, map: &StreetMap, start: &GeoCoord, end: &GeoCoord) -> CourierResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the street graph with the great-circle heuristic.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, map: &StreetMap, start: &GeoCoord, end: &GeoCoord) -> CourierResult<Route> {
        let from = map
            .node(start)
            .ok_or_else(|| CourierError::BadCoord(start.clone()))?;
        let to = map
            .node(end)
            .ok_or_else(|| CourierError::BadCoord(end.clone()))?;

        if from == to {
            return Ok(Route {
                segments: vec![],
                miles: 0.0,
            });
        }

        astar(map, from, to).ok_or_else(|| CourierError::NoRoute {
            from: start.clone(),
            to: end.clone(),
        })
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Open-set entry: node plus its `f = g + h` priority and the `g` it was
/// pushed with.  Stale entries (whose `g` exceeds the best known cost by
/// the time they are popped) stay in the heap and are skipped — cheaper
/// than a decrease-key structure at this scale.
#[derive(Copy, Clone)]
struct OpenEntry {
    f: f64,
    g: f64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ascending by f, tie-broken by node id so runs are deterministic.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

fn astar(map: &StreetMap, from: NodeId, to: NodeId) -> Option<Route> {
    let n = map.node_count();
    // dist[v] = best known cost (miles) from `from` to v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = edge that reached v along the best known path.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    let goal = map.coord(to);
    let h = |node: NodeId| crow_miles(map.coord(node), goal);

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
    heap.push(Reverse(OpenEntry {
        f: h(from),
        g: 0.0,
        node: from,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        if entry.node == to {
            return Some(reconstruct(map, &prev_edge, from, to, dist[to.index()]));
        }

        // Skip stale heap entries.
        if entry.g > dist[entry.node.index()] {
            continue;
        }

        for edge in map.out_edges(entry.node) {
            let neighbor = map.edge_to(edge);
            let new_cost = entry.g + map.edge_len_miles(edge);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse(OpenEntry {
                    f: new_cost + h(neighbor),
                    g: new_cost,
                    node: neighbor,
                }));
            }
        }
    }

    None
}

fn reconstruct(
    map: &StreetMap,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
    miles: f64,
) -> Route {
    let mut segments = Vec::new();
    let mut current = to;
    while current != from {
        let edge = prev_edge[current.index()];
        debug_assert_ne!(edge, EdgeId::INVALID, "predecessor chain must reach start");
        segments.push(map.segment(edge));
        current = map.edge_from(edge);
    }
    segments.reverse();
    Route { segments, miles }
}
