//! Distributed (line) loads
//!
//! A distributed load spreads force over `[start, end]` with an intensity that
//! varies linearly from `intensity_start` to `intensity_end`. Equal intensities
//! give the uniform case; a zero at one end gives the triangular case.
//!
//! ## Sign Convention
//! - Positive intensity acts downward (same sense as a positive point load)
//! - Positions are measured from the left support

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Intensities closer than this are treated as uniform
const UNIFORM_EPSILON: f64 = 1e-10;

/// A linearly varying load over `[start, end]`.
///
/// The bounds are checked on construction so every value of this type has
/// `start < end`; deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDistributedLoad")]
pub struct DistributedLoad {
    intensity_start: f64,
    intensity_end: f64,
    start: f64,
    end: f64,
}

/// Unchecked wire form, validated into [`DistributedLoad`]
#[derive(Deserialize)]
struct RawDistributedLoad {
    intensity_start: f64,
    intensity_end: f64,
    start: f64,
    end: f64,
}

impl TryFrom<RawDistributedLoad> for DistributedLoad {
    type Error = BeamError;

    fn try_from(raw: RawDistributedLoad) -> BeamResult<Self> {
        DistributedLoad::new(raw.intensity_start, raw.intensity_end, raw.start, raw.end)
    }
}

impl DistributedLoad {
    /// Create a linearly varying load.
    ///
    /// Fails with [`BeamError::InvalidRange`] unless `start < end`; a NaN bound
    /// fails the comparison and is rejected too.
    ///
    /// ```rust
    /// use beam_core::loads::DistributedLoad;
    ///
    /// let udl = DistributedLoad::new(5.0, 5.0, 1.0, 4.0).unwrap();
    /// assert!(udl.is_uniform());
    /// assert_eq!(udl.resultant(), 15.0);
    ///
    /// assert!(DistributedLoad::new(5.0, 5.0, 4.0, 4.0).is_err());
    /// ```
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(intensity_start: f64, intensity_end: f64, start: f64, end: f64) -> BeamResult<Self> {
        if !(start < end) {
            return Err(BeamError::invalid_range(start, end));
        }
        Ok(DistributedLoad {
            intensity_start,
            intensity_end,
            start,
            end,
        })
    }

    /// Create a constant-intensity load
    pub fn uniform(intensity: f64, start: f64, end: f64) -> BeamResult<Self> {
        Self::new(intensity, intensity, start, end)
    }

    /// Intensity at `start`
    pub fn intensity_start(&self) -> f64 {
        self.intensity_start
    }

    /// Intensity at `end`
    pub fn intensity_end(&self) -> f64 {
        self.intensity_end
    }

    /// Left bound
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Right bound
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Loaded length `end - start`
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Check if the load is uniform (constant intensity)
    pub fn is_uniform(&self) -> bool {
        (self.intensity_start - self.intensity_end).abs() < UNIFORM_EPSILON
    }

    /// Rate of change of intensity along the beam
    fn slope(&self) -> f64 {
        (self.intensity_end - self.intensity_start) / self.span()
    }

    /// Intensity at `x`; zero outside the loaded interval
    pub fn intensity_at(&self, x: f64) -> f64 {
        if x < self.start || x > self.end {
            0.0
        } else {
            self.intensity_start + self.slope() * (x - self.start)
        }
    }

    /// Total force: area of the trapezoid under the intensity line
    pub fn resultant(&self) -> f64 {
        (self.intensity_start + self.intensity_end) / 2.0 * self.span()
    }

    /// First moment of the load about `x = 0`, i.e. `∫ q(t)·t dt`.
    ///
    /// Equals `resultant() * centroid()` whenever the centroid exists, and
    /// stays well defined when the resultant cancels out.
    pub fn first_moment(&self) -> f64 {
        let span = self.span();
        self.start * self.resultant()
            + self.intensity_start * span * span / 2.0
            + self.slope() * span.powi(3) / 3.0
    }

    /// Position of the resultant.
    ///
    /// Standard trapezoid centroid `start + span·(q1 + 2·q2) / (3·(q1 + q2))`.
    /// `None` when the resultant is zero (equal and opposite end intensities),
    /// judged relative to the load's own intensity scale.
    pub fn centroid(&self) -> Option<f64> {
        let resultant = self.resultant();
        let scale = (self.intensity_start.abs() + self.intensity_end.abs()) * self.span();
        if resultant.abs() <= f64::EPSILON * scale {
            None
        } else {
            Some(self.first_moment() / resultant)
        }
    }

    /// Force of the part of this load lying left of `x`
    pub fn force_left_of(&self, x: f64) -> f64 {
        if x <= self.start {
            0.0
        } else if x >= self.end {
            self.resultant()
        } else {
            let d = x - self.start;
            self.intensity_start * d + self.slope() * d * d / 2.0
        }
    }

    /// Moment about section `x` of the part of this load lying left of `x`.
    ///
    /// - `x <= start`: nothing is loaded yet
    /// - inside the span: `∫_start^x q(t)·(x - t) dt`, the loaded part acting at
    ///   its own centroid
    /// - `x >= end`: the whole resultant acting at the centroid
    pub fn counter_moment(&self, x: f64) -> f64 {
        if x <= self.start {
            0.0
        } else if x >= self.end {
            self.resultant() * x - self.first_moment()
        } else {
            let d = x - self.start;
            self.intensity_start * d * d / 2.0 + self.slope() * d.powi(3) / 6.0
        }
    }
}
