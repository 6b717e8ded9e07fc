//! Geographic coordinate type and great-circle distance.
//!
//! `GeoCoord` keeps each latitude/longitude **both** as the verbatim decimal
//! string from the input and as a parsed `f64`.  Equality, hashing, and
//! ordering are defined on the textual forms only, so the street map's coord
//! index is insensitive to float rounding drift: two coords are the same key
//! iff their strings match bit-exactly.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{CourierError, CourierResult};

const EARTH_RADIUS_KM: f64 = 6371.0;
const MILES_PER_KM: f64 = 1.0 / 1.609344;

/// A point on Earth, identified by its decimal-degree latitude/longitude
/// strings.  Immutable after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoord {
    lat_text: String,
    lon_text: String,
    lat: f64,
    lon: f64,
}

impl GeoCoord {
    /// Parse a coordinate from its textual latitude and longitude.
    ///
    /// The strings are stored verbatim (after trimming surrounding
    /// whitespace) and also parsed to `f64` for distance math.
    ///
    /// # Errors
    ///
    /// [`CourierError::Parse`] if either token is not a decimal number.
    pub fn new(lat: &str, lon: &str) -> CourierResult<GeoCoord> {
        let lat_text = lat.trim().to_string();
        let lon_text = lon.trim().to_string();
        let parse = |text: &str| {
            text.parse::<f64>()
                .map_err(|_| CourierError::Parse(format!("invalid coordinate {text:?}")))
        };
        Ok(GeoCoord {
            lat: parse(&lat_text)?,
            lon: parse(&lon_text)?,
            lat_text,
            lon_text,
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_text(&self) -> &str {
        &self.lat_text
    }

    pub fn lon_text(&self) -> &str {
        &self.lon_text
    }
}

// Identity is textual, not numeric: "34.0" and "34.00" are distinct keys.

impl PartialEq for GeoCoord {
    fn eq(&self, other: &Self) -> bool {
        self.lat_text == other.lat_text && self.lon_text == other.lon_text
    }
}

impl Eq for GeoCoord {}

impl Hash for GeoCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat_text.hash(state);
        self.lon_text.hash(state);
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat_text
            .cmp(&other.lat_text)
            .then_with(|| self.lon_text.cmp(&other.lon_text))
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat_text, self.lon_text)
    }
}

/// Haversine great-circle distance in miles.
///
/// WGS-84 mean radius; the mile unit is part of the routing contract, not an
/// implementation detail.
pub fn crow_miles(a: &GeoCoord, b: &GeoCoord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let u = ((lat2 - lat1) / 2.0).sin();
    let v = ((lon2 - lon1) / 2.0).sin();

    let km = 2.0 * EARTH_RADIUS_KM * (u * u + lat1.cos() * lat2.cos() * v * v).sqrt().asin();
    km * MILES_PER_KM
}
