//! # Analysis Settings
//!
//! Knobs that change how a [`Beam`](crate::beam::Beam) is solved. Settings
//! live on the beam so a front end configures them once and every later
//! recompute picks them up.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::settings::{AnalysisSettings, ReactionMode};
//!
//! let settings = AnalysisSettings::default()
//!     .with_reaction_mode(ReactionMode::Equilibrium)
//!     .with_sample_count(201);
//!
//! assert_eq!(settings.sample_count, 201);
//! assert_eq!(settings.removal_tolerance, 0.1);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of stations in a sampled moment diagram
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Default position tolerance used when removing loads by position
pub const DEFAULT_REMOVAL_TOLERANCE: f64 = 0.1;

/// Which equations the reaction solver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReactionMode {
    /// Point loads only: `left = ΣP·a / L`, `right = ΣP - left`.
    ///
    /// Distributed loads and torques still shape the moment diagram but are
    /// not balanced by the supports.
    #[default]
    Reference,

    /// Full static equilibrium (ΣF = 0, ΣM = 0) over every load on the beam.
    ///
    /// Distributed loads act as their resultant at the centroid and torques as
    /// pure couples. The moment diagram closes to zero at both supports.
    Equilibrium,
}

impl ReactionMode {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ReactionMode::Reference => "reference",
            ReactionMode::Equilibrium => "equilibrium",
        }
    }
}

impl fmt::Display for ReactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ReactionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" | "ref" => Ok(ReactionMode::Reference),
            "equilibrium" | "eq" | "full" => Ok(ReactionMode::Equilibrium),
            other => Err(format!(
                "unknown reaction mode '{}' (expected 'reference' or 'equilibrium')",
                other
            )),
        }
    }
}

/// Settings consulted by every analysis call on a beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Reaction solver selection
    pub reaction_mode: ReactionMode,

    /// Stations used by [`Beam::compute_default_moment_curve`](crate::beam::Beam::compute_default_moment_curve)
    pub sample_count: usize,

    /// Tolerance used by [`Beam::remove_point_load`](crate::beam::Beam::remove_point_load)
    pub removal_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            reaction_mode: ReactionMode::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            removal_tolerance: DEFAULT_REMOVAL_TOLERANCE,
        }
    }
}

impl AnalysisSettings {
    /// Set the reaction solver
    pub fn with_reaction_mode(mut self, mode: ReactionMode) -> Self {
        self.reaction_mode = mode;
        self
    }

    /// Set the number of diagram stations
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Set the default removal tolerance (its absolute value is used)
    pub fn with_removal_tolerance(mut self, tolerance: f64) -> Self {
        self.removal_tolerance = tolerance.abs();
        self
    }
}
