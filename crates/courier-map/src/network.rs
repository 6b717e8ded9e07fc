//! Street graph representation and builder.
//!
//! # Data layout
//!
//! Coordinates live in an arena indexed by `NodeId`; a `HashMap` keyed by
//! the coord's **textual** form maps each coordinate back to its handle.
//! Street names are interned once and referenced by `NameId`.
//!
//! Outgoing edges use **Compressed Sparse Row (CSR)** format: given a
//! `NodeId n`, its outgoing edges occupy the `EdgeId` range
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_name`, `edge_len_miles`,
//! `edge_forward`) are sorted by source node and indexed by `EdgeId`, so
//! iterating a node's neighbors is a contiguous scan — ideal for the A*
//! inner loop.  Every undirected map-file segment contributes two directed
//! edges; the one matching the file's written direction carries
//! `edge_forward = true`, which the map emitter uses to reproduce the file.

use std::collections::HashMap;

use courier_core::{crow_miles, EdgeId, GeoCoord, NameId, NodeId, StreetSegment};

// ── StreetMap ─────────────────────────────────────────────────────────────────

/// Immutable street graph: coord arena, textual-coord index, interned
/// street names, CSR adjacency.
///
/// Do not construct directly; use [`StreetMapBuilder`] or the loader.
#[derive(Debug)]
pub struct StreetMap {
    coords: Vec<GeoCoord>,
    index: HashMap<GeoCoord, NodeId>,
    names: Vec<String>,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = node count + 1.
    node_out_start: Vec<u32>,

    edge_from: Vec<NodeId>,
    edge_to: Vec<NodeId>,
    edge_name: Vec<NameId>,
    edge_len_miles: Vec<f64>,
    edge_forward: Vec<bool>,
}

impl StreetMap {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of **directed** edges (twice the map file's segment count).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn street_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    // ── Handle-level accessors (used by the router) ───────────────────────

    /// Look up the arena handle of a coordinate, by textual equality.
    pub fn node(&self, coord: &GeoCoord) -> Option<NodeId> {
        self.index.get(coord).copied()
    }

    pub fn coord(&self, node: NodeId) -> &GeoCoord {
        &self.coords[node.index()]
    }

    pub fn name(&self, name: NameId) -> &str {
        &self.names[name.index()]
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(EdgeId::new)
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    #[inline]
    pub fn edge_from(&self, edge: EdgeId) -> NodeId {
        self.edge_from[edge.index()]
    }

    #[inline]
    pub fn edge_to(&self, edge: EdgeId) -> NodeId {
        self.edge_to[edge.index()]
    }

    #[inline]
    pub fn edge_name(&self, edge: EdgeId) -> NameId {
        self.edge_name[edge.index()]
    }

    /// Precomputed great-circle length of a directed edge.
    #[inline]
    pub fn edge_len_miles(&self, edge: EdgeId) -> f64 {
        self.edge_len_miles[edge.index()]
    }

    /// `true` if this directed edge matches the direction written in the
    /// map file (as opposed to the synthesized reverse direction).
    #[inline]
    pub fn edge_is_forward(&self, edge: EdgeId) -> bool {
        self.edge_forward[edge.index()]
    }

    /// Materialize a directed edge as a full [`StreetSegment`].
    pub fn segment(&self, edge: EdgeId) -> StreetSegment {
        StreetSegment::new(
            self.coords[self.edge_from[edge.index()].index()].clone(),
            self.coords[self.edge_to[edge.index()].index()].clone(),
            self.names[self.edge_name[edge.index()].index()].clone(),
        )
    }

    // ── Coord-level surface ───────────────────────────────────────────────

    /// All outgoing segments of a coordinate, or `None` if the coordinate
    /// is not a key of the graph.
    pub fn neighbors(&self, coord: &GeoCoord) -> Option<Vec<StreetSegment>> {
        let node = self.node(coord)?;
        Some(self.out_edges(node).map(|e| self.segment(e)).collect())
    }
}

// ── StreetMapBuilder ──────────────────────────────────────────────────────────

/// Construct a [`StreetMap`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts undirected street segments in any order; each one
/// contributes both directed edges.  `build()` sorts edges by source node
/// and constructs the CSR arrays.
pub struct StreetMapBuilder {
    coords: Vec<GeoCoord>,
    index: HashMap<GeoCoord, NodeId>,
    names: Vec<String>,
    name_index: HashMap<String, NameId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    name: NameId,
    forward: bool,
}

impl StreetMapBuilder {
    pub fn new() -> StreetMapBuilder {
        StreetMapBuilder {
            coords: Vec::new(),
            index: HashMap::new(),
            names: Vec::new(),
            name_index: HashMap::new(),
            raw_edges: Vec::new(),
        }
    }

    /// Intern a coordinate and return its arena handle.  Coordinates with
    /// identical text share one handle.
    pub fn intern_coord(&mut self, coord: &GeoCoord) -> NodeId {
        if let Some(&id) = self.index.get(coord) {
            return id;
        }
        let id = NodeId::new(self.coords.len());
        self.coords.push(coord.clone());
        self.index.insert(coord.clone(), id);
        id
    }

    /// Intern a street name and return its handle.
    pub fn intern_name(&mut self, name: &str) -> NameId {
        if let Some(&id) = self.name_index.get(name) {
            return id;
        }
        let id = NameId::new(self.names.len());
        self.names.push(name.to_string());
        self.name_index.insert(name.to_string(), id);
        id
    }

    /// Add one undirected street segment: both directed edges are stored,
    /// and duplicates are kept as-is (not deduplicated).
    pub fn add_segment(&mut self, start: &GeoCoord, end: &GeoCoord, name: NameId) {
        let from = self.intern_coord(start);
        let to = self.intern_coord(end);
        self.raw_edges.push(RawEdge {
            from,
            to,
            name,
            forward: true,
        });
        self.raw_edges.push(RawEdge {
            from: to,
            to: from,
            name,
            forward: false,
        });
    }

    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`StreetMap`].
    ///
    /// Edge lengths are computed here, once, so the router never touches
    /// the haversine on its hot path.
    pub fn build(self) -> StreetMap {
        let node_count = self.coords.len();
        let edge_count = self.raw_edges.len();

        // Stable sort by source node: within one node the file's insertion
        // order is preserved, which keeps neighbor lists deterministic.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_name: Vec<NameId> = raw.iter().map(|e| e.name).collect();
        let edge_forward: Vec<bool> = raw.iter().map(|e| e.forward).collect();
        let edge_len_miles: Vec<f64> = raw
            .iter()
            .map(|e| crow_miles(&self.coords[e.from.index()], &self.coords[e.to.index()]))
            .collect();

        // Build CSR row pointer.
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        StreetMap {
            coords: self.coords,
            index: self.index,
            names: self.names,
            node_out_start,
            edge_from,
            edge_to,
            edge_name,
            edge_len_miles,
            edge_forward,
        }
    }
}

impl Default for StreetMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
