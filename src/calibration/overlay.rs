//! Heading overlay presentation
//!
//! Read-only view of the calibrated heading for UI consumers: a numeric
//! degree value with a cardinal direction and arrow glyph, or an explicit
//! calibrating state while the heading is still unknown. This module never
//! writes any other component's state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Eight-point compass rose direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Cardinal {
    /// Nearest cardinal for a compass heading in degrees
    pub fn from_degrees(heading_deg: f64) -> Self {
        let normalized = heading_deg.rem_euclid(360.0);
        let sector = ((normalized / 45.0).round() as usize) % 8;
        match sector {
            0 => Cardinal::N,
            1 => Cardinal::NE,
            2 => Cardinal::E,
            3 => Cardinal::SE,
            4 => Cardinal::S,
            5 => Cardinal::SW,
            6 => Cardinal::W,
            _ => Cardinal::NW,
        }
    }

    /// Directional indicator glyph
    pub fn arrow(&self) -> char {
        match self {
            Cardinal::N => '↑',
            Cardinal::NE => '↗',
            Cardinal::E => '→',
            Cardinal::SE => '↘',
            Cardinal::S => '↓',
            Cardinal::SW => '↙',
            Cardinal::W => '←',
            Cardinal::NW => '↖',
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Cardinal::N => "N",
            Cardinal::NE => "NE",
            Cardinal::E => "E",
            Cardinal::SE => "SE",
            Cardinal::S => "S",
            Cardinal::SW => "SW",
            Cardinal::W => "W",
            Cardinal::NW => "NW",
        };
        write!(f, "{}", label)
    }
}

/// Overlay state derived from the calibrated heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeadingIndicator {
    /// Heading not yet calibrated; distinct from any numeric value
    Calibrating,
    /// Heading locked for the session
    Locked { degrees: f64, cardinal: Cardinal },
}

impl HeadingIndicator {
    pub fn from_heading(heading: Option<f64>) -> Self {
        match heading {
            None => HeadingIndicator::Calibrating,
            Some(degrees) => HeadingIndicator::Locked {
                degrees,
                cardinal: Cardinal::from_degrees(degrees),
            },
        }
    }

    pub fn is_calibrating(&self) -> bool {
        matches!(self, HeadingIndicator::Calibrating)
    }
}

impl fmt::Display for HeadingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingIndicator::Calibrating => write!(f, "calibrating…"),
            HeadingIndicator::Locked { degrees, cardinal } => {
                write!(
                    f,
                    "{:03.0}° {} {}",
                    degrees.rem_euclid(360.0),
                    cardinal,
                    cardinal.arrow()
                )
            }
        }
    }
}
