//! Delivery requests and the navigation-command vocabulary.

use std::fmt;

use crate::geo::GeoCoord;

// ── DeliveryRequest ───────────────────────────────────────────────────────────

/// One item to drop off at one destination coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRequest {
    pub item: String,
    pub location: GeoCoord,
}

impl DeliveryRequest {
    pub fn new(item: impl Into<String>, location: GeoCoord) -> DeliveryRequest {
        DeliveryRequest {
            item: item.into(),
            location,
        }
    }
}

// ── Direction labels ──────────────────────────────────────────────────────────

/// Eight-way compass label for a Proceed command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassDirection {
    /// Discretize a flat-projection bearing on [0, 360) to a compass label.
    ///
    /// Total on the whole range.  The lower bound of the "south" band is
    /// strict: a bearing of exactly 247.5° falls through to the default
    /// "east" label.
    pub fn from_bearing(degrees: f64) -> CompassDirection {
        if (0.0..22.5).contains(&degrees) {
            CompassDirection::East
        } else if (22.5..67.5).contains(&degrees) {
            CompassDirection::Northeast
        } else if (67.5..112.5).contains(&degrees) {
            CompassDirection::North
        } else if (112.5..157.5).contains(&degrees) {
            CompassDirection::Northwest
        } else if (157.5..202.5).contains(&degrees) {
            CompassDirection::West
        } else if (202.5..247.5).contains(&degrees) {
            CompassDirection::Southwest
        } else if degrees > 247.5 && degrees < 292.5 {
            CompassDirection::South
        } else if (292.5..337.5).contains(&degrees) {
            CompassDirection::Southeast
        } else {
            CompassDirection::East
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompassDirection::North => "north",
            CompassDirection::Northeast => "northeast",
            CompassDirection::East => "east",
            CompassDirection::Southeast => "southeast",
            CompassDirection::South => "south",
            CompassDirection::Southwest => "southwest",
            CompassDirection::West => "west",
            CompassDirection::Northwest => "northwest",
        };
        write!(f, "{label}")
    }
}

/// Left-or-right label for a Turn command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Discretize a turn angle on [0, 360): [1, 180) is a left turn,
    /// [180, 359] a right turn.  Angles below 1° or above 359° mean the
    /// street continues straight and produce no Turn at all.
    pub fn from_angle(degrees: f64) -> Option<TurnDirection> {
        if !(1.0..=359.0).contains(&degrees) {
            None
        } else if degrees < 180.0 {
            Some(TurnDirection::Left)
        } else {
            Some(TurnDirection::Right)
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnDirection::Left => write!(f, "left"),
            TurnDirection::Right => write!(f, "right"),
        }
    }
}

// ── DeliveryCommand ───────────────────────────────────────────────────────────

/// One step of a delivery plan.
///
/// A Turn carries no distance; the Proceed that follows it carries the new
/// street's full accumulated distance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryCommand {
    Proceed {
        direction: CompassDirection,
        street: String,
        miles: f64,
    },
    Turn {
        direction: TurnDirection,
        street: String,
    },
    Deliver {
        item: String,
    },
}

impl fmt::Display for DeliveryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryCommand::Proceed {
                direction,
                street,
                miles,
            } => write!(f, "Proceed {direction} on {street} for {miles:.2} miles"),
            DeliveryCommand::Turn { direction, street } => {
                write!(f, "Turn {direction} on {street}")
            }
            DeliveryCommand::Deliver { item } => write!(f, "Deliver {item}"),
        }
    }
}
