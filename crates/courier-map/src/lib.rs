//! `courier-map` — street graph, map-file loading, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`network`] | `StreetMap` (coord arena + CSR adjacency), `StreetMapBuilder` |
//! | [`loader`]  | map-file grammar: `load_path` / `load_reader` / `write_map` |
//! | [`router`]  | `Router` trait, `Route`, `AStarRouter`                    |
//!
//! The map is built once from a file and is immutable afterwards; routing
//! holds only per-call working state, so concurrent `route` calls against a
//! shared `StreetMap` are safe.

pub mod loader;
pub mod network;
pub mod router;

#[cfg(test)]
mod tests;

pub use network::{StreetMap, StreetMapBuilder};
pub use router::{AStarRouter, Route, Router};
