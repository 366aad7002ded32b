//! Beam supports
//!
//! Supports describe how the beam is held. The reaction solver works on the
//! simply-supported idealisation (a reaction-bearing point at each end), so the
//! kind here only records which reaction components the support could resist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Support condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    /// Hinge: resists vertical and horizontal force, free to rotate
    Pin,
    /// Resists vertical force only
    Roller,
    /// Clamped: resists force and moment
    Fixed,
}

impl SupportKind {
    /// All support kinds in display order
    pub const ALL: [SupportKind; 3] = [SupportKind::Pin, SupportKind::Roller, SupportKind::Fixed];

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Pin => "Pin",
            SupportKind::Roller => "Roller",
            SupportKind::Fixed => "Fixed",
        }
    }

    /// Every kind carries a vertical reaction
    pub fn resists_vertical(&self) -> bool {
        true
    }

    /// Only a fixed support carries a moment reaction
    pub fn resists_moment(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }
}

impl fmt::Display for SupportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SupportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pin" | "pinned" | "hinge" | "hinged" | "simple" => Ok(SupportKind::Pin),
            "roller" => Ok(SupportKind::Roller),
            "fixed" | "clamped" => Ok(SupportKind::Fixed),
            other => Err(format!(
                "unknown support kind '{}' (expected pin, roller or fixed)",
                other
            )),
        }
    }
}

/// A support at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Distance from the left end
    pub position: f64,
    /// Support condition
    pub kind: SupportKind,
}

impl Support {
    /// Create a support
    pub fn new(kind: SupportKind, position: f64) -> Self {
        Support { position, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_components() {
        assert!(SupportKind::ALL.iter().all(|k| k.resists_vertical()));
        assert!(SupportKind::Fixed.resists_moment());
        assert!(!SupportKind::Pin.resists_moment());
        assert!(!SupportKind::Roller.resists_moment());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Hinged".parse::<SupportKind>(), Ok(SupportKind::Pin));
        assert_eq!("roller".parse::<SupportKind>(), Ok(SupportKind::Roller));
        assert_eq!("clamped".parse::<SupportKind>(), Ok(SupportKind::Fixed));
        assert!("glue".parse::<SupportKind>().is_err());
    }
}
