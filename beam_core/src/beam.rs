//! # Beam Model
//!
//! [`Beam`] owns a span length, an ordered list of [`Load`]s and a list of
//! [`Support`]s. It is a plain mutable aggregate: nothing derived is cached,
//! and every analysis call recomputes from the current state.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//!
//! let mut beam = Beam::new(10.0);
//! beam.add_point_load(100.0, 4.0);
//!
//! let reactions = beam.compute_reactions().unwrap();
//! assert_eq!(reactions.left, 40.0);
//! assert_eq!(reactions.right, 60.0);
//!
//! let curve = beam.compute_moment_curve(11).unwrap();
//! assert_eq!(curve[4], (4.0, 160.0));
//! ```

use log::{debug, warn};

use crate::analysis::{self, AnalysisResults, Reactions};
use crate::errors::BeamResult;
use crate::loads::{DistributedLoad, Load, PointLoad, Torque};
use crate::settings::AnalysisSettings;
use crate::supports::{Support, SupportKind};

/// A simply-supported beam and everything applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    length: f64,
    loads: Vec<Load>,
    supports: Vec<Support>,
    settings: AnalysisSettings,
}

impl Beam {
    /// Create an empty beam with default settings.
    ///
    /// Any length is accepted here; a zero, negative or non-finite length is
    /// reported as [`BeamError::DegenerateBeam`](crate::errors::BeamError::DegenerateBeam)
    /// by the analysis calls.
    pub fn new(length: f64) -> Self {
        Self::with_settings(length, AnalysisSettings::default())
    }

    /// Create an empty beam with explicit settings
    pub fn with_settings(length: f64, settings: AnalysisSettings) -> Self {
        Beam {
            length,
            loads: Vec::new(),
            supports: Vec::new(),
            settings,
        }
    }

    /// Span length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Change the span length. Loads keep their absolute positions.
    pub fn set_length(&mut self, length: f64) {
        debug!("beam length {} -> {}", self.length, length);
        self.length = length;
        for load in self.loads.iter().filter(|l| !l.is_within(length)) {
            warn!("{} now lies outside the span [0, {}]", load, length);
        }
    }

    /// Loads in insertion order
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Point loads in insertion order
    pub fn point_loads(&self) -> impl Iterator<Item = &PointLoad> + '_ {
        self.loads.iter().filter_map(Load::as_point)
    }

    /// Supports in insertion order
    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    /// Analysis settings
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Mutable access to the analysis settings
    pub fn settings_mut(&mut self) -> &mut AnalysisSettings {
        &mut self.settings
    }

    /// Whether the beam carries no load at all
    pub fn is_unloaded(&self) -> bool {
        self.loads.is_empty()
    }

    fn push_load(&mut self, load: Load) {
        if !load.is_within(self.length) {
            // Accepted: the lever arm is simply extrapolated
            warn!("{} lies outside the span [0, {}]", load, self.length);
        }
        debug!("adding {}", load);
        self.loads.push(load);
    }

    /// Append a point load.
    ///
    /// No range check is made: a position outside `[0, length]` is still
    /// solved with an extrapolated lever arm and logged at `warn` level.
    pub fn add_point_load(&mut self, magnitude: f64, position: f64) {
        self.push_load(Load::Point(PointLoad::new(magnitude, position)));
    }

    /// Append a linearly varying distributed load.
    ///
    /// Uniform when both intensities are equal. Fails with
    /// [`BeamError::InvalidRange`](crate::errors::BeamError::InvalidRange)
    /// when `start >= end`, leaving the beam unchanged.
    pub fn add_distributed_load(
        &mut self,
        intensity_start: f64,
        intensity_end: f64,
        start: f64,
        end: f64,
    ) -> BeamResult<()> {
        let load = DistributedLoad::new(intensity_start, intensity_end, start, end)?;
        self.push_load(Load::Distributed(load));
        Ok(())
    }

    /// Append a uniform distributed load
    pub fn add_uniform_load(&mut self, intensity: f64, start: f64, end: f64) -> BeamResult<()> {
        self.add_distributed_load(intensity, intensity, start, end)
    }

    /// Append an applied torque (pure couple)
    pub fn add_torque(&mut self, magnitude: f64, position: f64) {
        self.push_load(Load::Torque(Torque::new(magnitude, position)));
    }

    /// Append an already built load
    pub fn add_load(&mut self, load: impl Into<Load>) {
        self.push_load(load.into());
    }

    /// Append a support
    pub fn add_support(&mut self, kind: SupportKind, position: f64) {
        if !(0.0..=self.length).contains(&position) {
            warn!("{} support at {} lies outside the span [0, {}]", kind, position, self.length);
        }
        debug!("adding {} support at {}", kind, position);
        self.supports.push(Support::new(kind, position));
    }

    /// Remove point loads within the default tolerance of `position`.
    ///
    /// Uses `settings().removal_tolerance` (0.1 by default). Returns the number
    /// of loads removed.
    pub fn remove_point_load(&mut self, position: f64) -> usize {
        self.remove_point_load_within(position, self.settings.removal_tolerance)
    }

    /// Remove every point load with `|p - position| < tolerance`.
    ///
    /// Other load kinds are untouched. Returns the number removed; zero is a
    /// no-op.
    pub fn remove_point_load_within(&mut self, position: f64, tolerance: f64) -> usize {
        let before = self.loads.len();
        self.loads.retain(|load| match load {
            Load::Point(p) => (p.position - position).abs() >= tolerance,
            Load::Distributed(_) | Load::Torque(_) => true,
        });
        let removed = before - self.loads.len();
        debug!("removed {} point load(s) near {} (tolerance {})", removed, position, tolerance);
        removed
    }

    /// Remove the load at `index` (list-selection removal)
    pub fn remove_load(&mut self, index: usize) -> Option<Load> {
        if index < self.loads.len() {
            let load = self.loads.remove(index);
            debug!("removed load #{}: {}", index, load);
            Some(load)
        } else {
            None
        }
    }

    /// Remove supports with `|s - position| < tolerance`; returns the count removed
    pub fn remove_support(&mut self, position: f64, tolerance: f64) -> usize {
        let before = self.supports.len();
        self.supports
            .retain(|support| (support.position - position).abs() >= tolerance);
        let removed = before - self.supports.len();
        debug!("removed {} support(s) near {} (tolerance {})", removed, position, tolerance);
        removed
    }

    /// Index of the point load closest to `position`, if one lies within `tolerance`
    pub fn nearest_point_load(&self, position: f64, tolerance: f64) -> Option<usize> {
        self.loads
            .iter()
            .enumerate()
            .filter_map(|(i, load)| load.as_point().map(|p| (i, (p.position - position).abs())))
            .filter(|&(_, distance)| distance < tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Move the point load nearest to `from` (within `tolerance`) to `to`.
    ///
    /// Returns `false` when no point load is close enough.
    pub fn move_point_load(&mut self, from: f64, to: f64, tolerance: f64) -> bool {
        let Some(index) = self.nearest_point_load(from, tolerance) else {
            return false;
        };
        if let Load::Point(p) = &mut self.loads[index] {
            p.position = to;
        }
        debug!("moved point load #{} from {} to {}", index, from, to);
        if !(0.0..=self.length).contains(&to) {
            warn!("point load moved outside the span [0, {}]", self.length);
        }
        true
    }

    /// Remove all loads, keeping supports and settings
    pub fn clear_loads(&mut self) {
        self.loads.clear();
    }

    /// Remove all supports, keeping loads and settings
    pub fn clear_supports(&mut self) {
        self.supports.clear();
    }

    /// Remove all loads and supports; length and settings are kept
    pub fn clear(&mut self) {
        debug!("clearing {} load(s) and {} support(s)", self.loads.len(), self.supports.len());
        self.clear_loads();
        self.clear_supports();
    }

    /// Solve the end reactions with the configured [`ReactionMode`](crate::settings::ReactionMode).
    ///
    /// # Errors
    /// - `DegenerateBeam` when the length is not positive and finite
    /// - `EmptyLoadSet` when there is nothing for the selected solver to balance
    pub fn compute_reactions(&self) -> BeamResult<Reactions> {
        analysis::solve_reactions(self.length, &self.loads, self.settings.reaction_mode)
    }

    /// Bending moment at a single section
    pub fn moment_at(&self, x: f64) -> BeamResult<f64> {
        let reactions = self.compute_reactions()?;
        Ok(analysis::moment_at(&reactions, &self.loads, x))
    }

    /// Sample the bending moment at `sample_count` evenly spaced stations.
    ///
    /// Returns `(x, moment)` pairs from `x = 0` to `x = length`. Fails with the
    /// same errors as [`Beam::compute_reactions`].
    pub fn compute_moment_curve(&self, sample_count: usize) -> BeamResult<Vec<(f64, f64)>> {
        let reactions = self.compute_reactions()?;
        Ok(analysis::moment_curve(&reactions, &self.loads, self.length, sample_count))
    }

    /// [`Beam::compute_moment_curve`] with `settings().sample_count` stations
    pub fn compute_default_moment_curve(&self) -> BeamResult<Vec<(f64, f64)>> {
        self.compute_moment_curve(self.settings.sample_count)
    }

    /// Reactions, sampled diagram and moment extremes in one pass
    pub fn analyze(&self) -> BeamResult<AnalysisResults> {
        self.analyze_with(self.settings.sample_count)
    }

    /// [`Beam::analyze`] with an explicit station count
    pub fn analyze_with(&self, sample_count: usize) -> BeamResult<AnalysisResults> {
        let reactions = self.compute_reactions()?;
        Ok(AnalysisResults::new(
            self.length,
            self.settings.reaction_mode,
            reactions,
            &self.loads,
            sample_count,
        ))
    }
}
