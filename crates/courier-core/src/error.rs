//! Shared error type.
//!
//! The whole planner recognizes exactly three failures: a malformed map or
//! deliveries file (`Parse`), an endpoint that is not on the street map
//! (`BadCoord`), and an exhausted search (`NoRoute`).  One enum in the core
//! crate keeps the taxonomy in one place; the map, routing, and planning
//! crates all surface it unchanged.

use thiserror::Error;

use crate::geo::GeoCoord;

/// The error type for all `courier-*` crates.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("coordinate {0} is not on the street map")]
    BadCoord(GeoCoord),

    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoCoord, to: GeoCoord },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `courier-*` crates.
pub type CourierResult<T> = Result<T, CourierError>;
