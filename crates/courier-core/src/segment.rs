//! Directed street segment and the angle math the plan emitter relies on.
//!
//! Angles use a flat lat/lon projection: `atan2(Δlat, Δlon)` in degrees,
//! normalized to [0, 360).  0° points east, 90° north, 180° west, 270° south.
//! The compass labels in `delivery` are defined against this convention.

use crate::geo::{crow_miles, GeoCoord};

/// A directed edge of the street graph: start coord, end coord, street name.
///
/// For every undirected physical street segment in a map file, the graph
/// stores both directions; [`reversed`](Self::reversed) produces one from
/// the other.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetSegment {
    pub start: GeoCoord,
    pub end: GeoCoord,
    pub name: String,
}

impl StreetSegment {
    pub fn new(start: GeoCoord, end: GeoCoord, name: impl Into<String>) -> StreetSegment {
        StreetSegment {
            start,
            end,
            name: name.into(),
        }
    }

    /// The same physical segment travelled the other way: endpoints swapped,
    /// name unchanged.
    pub fn reversed(&self) -> StreetSegment {
        StreetSegment {
            start: self.end.clone(),
            end: self.start.clone(),
            name: self.name.clone(),
        }
    }

    /// Great-circle length of this segment in miles.
    pub fn length_miles(&self) -> f64 {
        crow_miles(&self.start, &self.end)
    }

    /// Direction of travel in degrees on [0, 360), flat-projection.
    pub fn bearing(&self) -> f64 {
        let degrees = (self.end.lat() - self.start.lat())
            .atan2(self.end.lon() - self.start.lon())
            .to_degrees();
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    /// Exterior angle from this segment's direction to `next`'s direction,
    /// normalized to [0, 360).  Left turns land in [1, 180), right turns in
    /// [180, 360); values near 0 or 360 mean "straight through".
    pub fn turn_angle(&self, next: &StreetSegment) -> f64 {
        let degrees = next.bearing() - self.bearing();
        if degrees < 0.0 {
            degrees + 360.0
        } else if degrees > 360.0 {
            degrees - 360.0
        } else {
            degrees
        }
    }
}
