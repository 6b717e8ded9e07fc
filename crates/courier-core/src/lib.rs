//! `courier-core` — foundational types for the courier delivery planner.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`geo`]      | `GeoCoord`, haversine distance in miles                 |
//! | [`segment`]  | `StreetSegment`, bearing and turn-angle math            |
//! | [`delivery`] | `DeliveryRequest`, `DeliveryCommand`, direction labels  |
//! | [`ids`]      | `NodeId`, `EdgeId`, `NameId` arena handles              |
//! | [`rng`]      | `CourierRng` (seedable, for the tour optimizer)         |
//! | [`error`]    | `CourierError`, `CourierResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod delivery;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod segment;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use delivery::{CompassDirection, DeliveryCommand, DeliveryRequest, TurnDirection};
pub use error::{CourierError, CourierResult};
pub use geo::{crow_miles, GeoCoord};
pub use ids::{EdgeId, NameId, NodeId};
pub use rng::CourierRng;
pub use segment::StreetSegment;
