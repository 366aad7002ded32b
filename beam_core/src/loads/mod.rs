//! Loads applied to a beam
//!
//! Every load kind is a variant of [`Load`], and each one reduces to the same
//! question for the moment solver: how much moment does the part of this load
//! lying left of section `x` produce about `x`? That is
//! [`Load::counter_moment`], and the beam sums it over all loads.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{Load, PointLoad};
//!
//! let load = Load::Point(PointLoad::new(100.0, 4.0));
//! assert_eq!(load.counter_moment(2.0), 0.0);
//! assert_eq!(load.counter_moment(6.0), 200.0);
//! assert_eq!(load.display_name(), "Point");
//! ```

pub mod distributed;

pub use distributed::DistributedLoad;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concentrated force. Positive magnitude acts downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Force magnitude (downward positive)
    pub magnitude: f64,
    /// Distance from the left support
    pub position: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(magnitude: f64, position: f64) -> Self {
        PointLoad {
            magnitude,
            position,
        }
    }

    /// `P·(x - a)` once the section is at or past the load
    pub fn counter_moment(&self, x: f64) -> f64 {
        if x >= self.position {
            self.magnitude * (x - self.position)
        } else {
            0.0
        }
    }
}

/// A concentrated couple.
///
/// Positive magnitude raises the bending moment for every section at or past
/// `position`, independent of lever arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torque {
    /// Couple magnitude
    pub magnitude: f64,
    /// Distance from the left support
    pub position: f64,
}

impl Torque {
    /// Create an applied torque
    pub fn new(magnitude: f64, position: f64) -> Self {
        Torque {
            magnitude,
            position,
        }
    }

    /// Step of `-M0` at the application point (a pure couple)
    pub fn counter_moment(&self, x: f64) -> f64 {
        if x >= self.position {
            -self.magnitude
        } else {
            0.0
        }
    }
}

/// Any load the beam can carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force
    Point(PointLoad),
    /// Uniform or linearly varying line load
    Distributed(DistributedLoad),
    /// Concentrated couple
    Torque(Torque),
}

impl Load {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point(_) => "Point",
            Load::Distributed(d) if d.is_uniform() => "Uniform",
            Load::Distributed(_) => "Linear",
            Load::Torque(_) => "Torque",
        }
    }

    /// Position used to pick a load by location (the start of a distributed load)
    pub fn anchor(&self) -> f64 {
        match self {
            Load::Point(p) => p.position,
            Load::Distributed(d) => d.start(),
            Load::Torque(t) => t.position,
        }
    }

    /// Net vertical force carried by the load (downward positive)
    pub fn resultant(&self) -> f64 {
        match self {
            Load::Point(p) => p.magnitude,
            Load::Distributed(d) => d.resultant(),
            Load::Torque(_) => 0.0,
        }
    }

    /// Moment of the load's force about the left support (`Σ F·arm`)
    pub fn first_moment(&self) -> f64 {
        match self {
            Load::Point(p) => p.magnitude * p.position,
            Load::Distributed(d) => d.first_moment(),
            Load::Torque(_) => 0.0,
        }
    }

    /// Applied couple, zero for force loads
    pub fn couple(&self) -> f64 {
        match self {
            Load::Torque(t) => t.magnitude,
            Load::Point(_) | Load::Distributed(_) => 0.0,
        }
    }

    /// Vertical force of the part of this load left of section `x`.
    ///
    /// The shear just right of `x` is the left reaction minus the sum of these.
    pub fn force_left_of(&self, x: f64) -> f64 {
        match self {
            Load::Point(p) if x >= p.position => p.magnitude,
            Load::Point(_) | Load::Torque(_) => 0.0,
            Load::Distributed(d) => d.force_left_of(x),
        }
    }

    /// Moment about section `x` produced by the part of this load left of `x`.
    ///
    /// The bending moment is the left reaction's `R·x` minus the sum of these.
    pub fn counter_moment(&self, x: f64) -> f64 {
        match self {
            Load::Point(p) => p.counter_moment(x),
            Load::Distributed(d) => d.counter_moment(x),
            Load::Torque(t) => t.counter_moment(x),
        }
    }

    /// Whether every coordinate of the load lies on a beam of `length`
    pub fn is_within(&self, length: f64) -> bool {
        let on_beam = |x: f64| (0.0..=length).contains(&x);
        match self {
            Load::Point(p) => on_beam(p.position),
            Load::Distributed(d) => on_beam(d.start()) && on_beam(d.end()),
            Load::Torque(t) => on_beam(t.position),
        }
    }

    /// Point load payload, if this is one
    pub fn as_point(&self) -> Option<&PointLoad> {
        match self {
            Load::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PointLoad> for Load {
    fn from(load: PointLoad) -> Self {
        Load::Point(load)
    }
}

impl From<DistributedLoad> for Load {
    fn from(load: DistributedLoad) -> Self {
        Load::Distributed(load)
    }
}

impl From<Torque> for Load {
    fn from(load: Torque) -> Self {
        Load::Torque(load)
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Point(p) => write!(f, "Point load {} at {}", p.magnitude, p.position),
            Load::Distributed(d) if d.is_uniform() => write!(
                f,
                "Uniform load {} from {} to {}",
                d.intensity_start(),
                d.start(),
                d.end()
            ),
            Load::Distributed(d) => write!(
                f,
                "Linear load {} -> {} from {} to {}",
                d.intensity_start(),
                d.intensity_end(),
                d.start(),
                d.end()
            ),
            Load::Torque(t) => write!(f, "Torque {} at {}", t.magnitude, t.position),
        }
    }
}
