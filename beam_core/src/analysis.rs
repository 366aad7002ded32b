//! Simply-Supported Beam Analysis
//!
//! Reaction solving and bending-moment superposition over a load list.
//!
//! The moment at a section is computed once per section as
//!
//! ```text
//! M(x) = R_left · x  -  Σ counter_moment_i(x)
//! ```
//!
//! so the reaction baseline is applied exactly once no matter how many loads
//! the beam carries.
//!
//! ## Sign Convention
//! - Positive load: downward
//! - Positive reaction: upward
//! - Positive moment: sagging (tension on bottom fiber)
//!
//! ## Example
//! ```rust
//! use beam_core::analysis::{solve_reactions, moment_at};
//! use beam_core::loads::{Load, PointLoad};
//! use beam_core::settings::ReactionMode;
//!
//! let loads = vec![Load::Point(PointLoad::new(100.0, 5.0))];
//! let reactions = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
//! assert_eq!(reactions.left, 50.0);
//! assert_eq!(moment_at(&reactions, &loads, 5.0), 250.0);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::Load;
use crate::settings::ReactionMode;

/// Support reactions at the two ends of the span (upward positive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at the left support (x = 0)
    pub left: f64,
    /// Reaction at the right support (x = length)
    pub right: f64,
}

impl Reactions {
    /// Sum of both reactions
    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

/// Fail with [`BeamError::DegenerateBeam`] unless `length` is positive and finite
pub fn check_length(length: f64) -> BeamResult<()> {
    if length > 0.0 && length.is_finite() {
        Ok(())
    } else {
        Err(BeamError::degenerate(length))
    }
}

/// Solve the two end reactions.
///
/// - [`ReactionMode::Reference`]: `left = ΣP·a / L`, `right = ΣP - left`,
///   over point loads only. Fails with [`BeamError::EmptyLoadSet`] when the
///   list holds no point load.
/// - [`ReactionMode::Equilibrium`]: ΣF = 0 and ΣM = 0 over every load.
///   Fails with [`BeamError::EmptyLoadSet`] when the list is empty.
pub fn solve_reactions(length: f64, loads: &[Load], mode: ReactionMode) -> BeamResult<Reactions> {
    check_length(length)?;

    let reactions = match mode {
        ReactionMode::Reference => {
            let points: Vec<_> = loads.iter().filter_map(Load::as_point).collect();
            if points.is_empty() {
                return Err(BeamError::EmptyLoadSet);
            }
            let total_force: f64 = points.iter().map(|p| p.magnitude).sum();
            let total_moment: f64 = points.iter().map(|p| p.magnitude * p.position).sum();
            let left = total_moment / length;
            Reactions {
                left,
                right: total_force - left,
            }
        }
        ReactionMode::Equilibrium => {
            if loads.is_empty() {
                return Err(BeamError::EmptyLoadSet);
            }
            let total_force: f64 = loads.iter().map(Load::resultant).sum();
            // Moment balance about the left support
            let about_left: f64 = loads.iter().map(|l| l.first_moment() + l.couple()).sum();
            let right = about_left / length;
            Reactions {
                left: total_force - right,
                right,
            }
        }
    };

    debug!(
        "solved reactions ({} mode, {} loads): left = {:.6}, right = {:.6}",
        mode,
        loads.len(),
        reactions.left,
        reactions.right
    );
    Ok(reactions)
}

/// Bending moment at `x` for already-solved reactions
pub fn moment_at(reactions: &Reactions, loads: &[Load], x: f64) -> f64 {
    let counter: f64 = loads.iter().map(|load| load.counter_moment(x)).sum();
    reactions.left * x - counter
}

/// Shear force just right of section `x` for already-solved reactions
pub fn shear_at(reactions: &Reactions, loads: &[Load], x: f64) -> f64 {
    let carried: f64 = loads.iter().map(|load| load.force_left_of(x)).sum();
    reactions.left - carried
}

/// Sections inside `[0, length]` where the shear passes through zero.
///
/// Between consecutive load coordinates the intensity is linear, so the shear
/// is a quadratic in `x`. Each segment's quadratic is recovered from three
/// interior evaluations and its roots in the segment are returned.
pub fn zero_shear_sections(reactions: &Reactions, loads: &[Load], length: f64) -> Vec<f64> {
    let mut breaks: Vec<f64> = loads
        .iter()
        .flat_map(|load| match load {
            Load::Distributed(d) => vec![d.start(), d.end()],
            Load::Point(_) | Load::Torque(_) => vec![load.anchor()],
        })
        .chain([0.0, length])
        .filter(|x| (0.0..=length).contains(x))
        .collect();
    breaks.sort_by(f64::total_cmp);
    breaks.dedup();

    let mut sections = Vec::new();
    for pair in breaks.windows(2) {
        let (x0, h) = (pair[0], pair[1] - pair[0]);
        if h <= 0.0 {
            continue;
        }
        // V(s) = a + b·s + c·s² with s in [-1/2, 1/2] across the segment
        let v = |s: f64| shear_at(reactions, loads, x0 + (s + 0.5) * h);
        let (v1, v2, v3) = (v(-0.25), v(0.0), v(0.25));
        let a = v2;
        let b = (v3 - v1) * 2.0;
        let c = (v3 - 2.0 * v2 + v1) * 8.0;

        let scale = a.abs() + b.abs() + c.abs();
        if scale == 0.0 {
            continue;
        }
        let roots = if c.abs() <= 1e-12 * scale {
            if b.abs() <= 1e-12 * scale {
                vec![]
            } else {
                vec![-a / b]
            }
        } else {
            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                vec![]
            } else {
                let sq = disc.sqrt();
                vec![(-b + sq) / (2.0 * c), (-b - sq) / (2.0 * c)]
            }
        };
        sections.extend(
            roots
                .into_iter()
                .filter(|s| (-0.5..=0.5).contains(s))
                .map(|s| x0 + (s + 0.5) * h),
        );
    }
    sections
}

/// `count` evenly spaced stations over `[0, length]`, both ends included.
///
/// `count == 0` gives no stations and `count == 1` gives only `0.0`.
pub fn sample_stations(length: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = count - 1;
            (0..count)
                .map(|i| {
                    if i == last {
                        length
                    } else {
                        length * i as f64 / last as f64
                    }
                })
                .collect()
        }
    }
}

/// Sampled `(x, moment)` pairs over the span
pub fn moment_curve(reactions: &Reactions, loads: &[Load], length: f64, count: usize) -> Vec<(f64, f64)> {
    let curve: Vec<(f64, f64)> = sample_stations(length, count)
        .into_iter()
        .map(|x| (x, moment_at(reactions, loads, x)))
        .collect();
    trace!("sampled moment curve with {} stations", curve.len());
    curve
}

/// Results from beam analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Beam length the results were computed for
    pub length: f64,
    /// Solver used for the reactions
    pub reaction_mode: ReactionMode,
    /// Support reactions
    pub reactions: Reactions,

    /// Largest (most sagging) moment
    pub max_moment: f64,
    /// Position of the largest moment
    pub max_moment_position: f64,
    /// Smallest (most hogging) moment
    pub min_moment: f64,
    /// Position of the smallest moment
    pub min_moment_position: f64,

    /// Sampled moment values along the beam for plotting
    pub moment_diagram: Vec<(f64, f64)>,
}

impl AnalysisResults {
    /// Build results from solved reactions.
    ///
    /// Extremes are searched over the diagram stations, every load coordinate
    /// on the span (where point loads put their kinks) and every zero-shear
    /// section, so they do not depend on the sample count.
    pub fn new(
        length: f64,
        reaction_mode: ReactionMode,
        reactions: Reactions,
        loads: &[Load],
        sample_count: usize,
    ) -> Self {
        let moment_diagram = moment_curve(&reactions, loads, length, sample_count);

        let mut critical: Vec<(f64, f64)> = loads
            .iter()
            .flat_map(|load| match load {
                Load::Distributed(d) => vec![d.start(), d.end()],
                Load::Point(_) | Load::Torque(_) => vec![load.anchor()],
            })
            .chain([0.0, length])
            .filter(|x| (0.0..=length).contains(x))
            .chain(zero_shear_sections(&reactions, loads, length))
            .map(|x| (x, moment_at(&reactions, loads, x)))
            .collect();
        critical.extend_from_slice(&moment_diagram);

        let (mut max_moment, mut max_moment_position) = (f64::NEG_INFINITY, 0.0);
        let (mut min_moment, mut min_moment_position) = (f64::INFINITY, 0.0);
        for &(x, m) in &critical {
            if m > max_moment {
                max_moment = m;
                max_moment_position = x;
            }
            if m < min_moment {
                min_moment = m;
                min_moment_position = x;
            }
        }

        AnalysisResults {
            length,
            reaction_mode,
            reactions,
            max_moment,
            max_moment_position,
            min_moment,
            min_moment_position,
            moment_diagram,
        }
    }

    /// Largest absolute moment and where it occurs
    pub fn governing_moment(&self) -> (f64, f64) {
        if self.max_moment.abs() >= self.min_moment.abs() {
            (self.max_moment, self.max_moment_position)
        } else {
            (self.min_moment, self.min_moment_position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{DistributedLoad, PointLoad, Torque};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn point(magnitude: f64, position: f64) -> Load {
        Load::Point(PointLoad::new(magnitude, position))
    }

    #[test]
    fn test_reference_reactions() {
        let loads = vec![point(100.0, 4.0)];
        let r = solve_reactions(10.0, &loads, ReactionMode::Reference).unwrap();
        assert_relative_eq!(r.left, 40.0);
        assert_relative_eq!(r.right, 60.0);
    }

    #[test]
    fn test_reference_ignores_distributed_and_torque() {
        let loads = vec![
            point(100.0, 4.0),
            Load::Distributed(DistributedLoad::uniform(10.0, 0.0, 10.0).unwrap()),
            Load::Torque(Torque::new(50.0, 2.0)),
        ];
        let r = solve_reactions(10.0, &loads, ReactionMode::Reference).unwrap();
        assert_relative_eq!(r.left, 40.0);
        assert_relative_eq!(r.total(), 100.0);
    }

    #[test]
    fn test_reference_needs_a_point_load() {
        let loads = vec![Load::Distributed(DistributedLoad::uniform(1.0, 0.0, 2.0).unwrap())];
        assert_eq!(
            solve_reactions(10.0, &loads, ReactionMode::Reference),
            Err(BeamError::EmptyLoadSet)
        );
    }

    #[test]
    fn test_equilibrium_point_load() {
        // R1 = P(L-a)/L = 60, R2 = Pa/L = 40
        let loads = vec![point(100.0, 4.0)];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        assert_relative_eq!(r.left, 60.0, epsilon = 1e-12);
        assert_relative_eq!(r.right, 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equilibrium_partial_uniform() {
        // 100 over [2, 8] on 10: W = 600 at 5, R1 = R2 = 300
        let loads = vec![Load::Distributed(DistributedLoad::uniform(100.0, 2.0, 8.0).unwrap())];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        assert_relative_eq!(r.left, 300.0, epsilon = 1e-9);
        assert_relative_eq!(r.right, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equilibrium_torque_only() {
        // Couple reaction: R1 = -M/L, R2 = M/L
        let loads = vec![Load::Torque(Torque::new(50.0, 3.0))];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        assert_relative_eq!(r.left, -5.0);
        assert_relative_eq!(r.right, 5.0);
        assert_abs_diff_eq!(moment_at(&r, &loads, 10.0), 0.0, epsilon = 1e-12);
        // Step of +50 at the torque
        let before = moment_at(&r, &loads, 3.0 - 1e-9);
        let after = moment_at(&r, &loads, 3.0);
        assert_relative_eq!(after - before, 50.0, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_lengths() {
        let loads = vec![point(1.0, 0.0)];
        for &length in &[0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = solve_reactions(length, &loads, ReactionMode::Reference).unwrap_err();
            assert_eq!(err.error_code(), "DEGENERATE_BEAM");
        }
    }

    #[test]
    fn test_superposition_baseline_once() {
        // Two symmetric point loads: M(x) between them is flat at P*a
        let loads = vec![point(10.0, 2.0), point(10.0, 8.0)];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        assert_relative_eq!(r.left, 10.0, epsilon = 1e-12);
        assert_relative_eq!(moment_at(&r, &loads, 5.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moment_at(&r, &loads, 10.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_uniform_midspan_moment() {
        // wL^2 / 8
        let loads = vec![Load::Distributed(DistributedLoad::uniform(100.0, 0.0, 10.0).unwrap())];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        assert_relative_eq!(moment_at(&r, &loads, 5.0), 1250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_stations() {
        assert!(sample_stations(10.0, 0).is_empty());
        assert_eq!(sample_stations(10.0, 1), vec![0.0]);
        let xs = sample_stations(10.0, 11);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[10], 10.0);
        assert_relative_eq!(xs[3], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_results_extremes_hit_load_position() {
        // 7 stations over 10 never land on 4.0, the anchor pass does
        let loads = vec![point(100.0, 4.0)];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        let results = AnalysisResults::new(10.0, ReactionMode::Equilibrium, r, &loads, 7);
        assert_eq!(results.moment_diagram.len(), 7);
        assert_relative_eq!(results.max_moment, 240.0, epsilon = 1e-9);
        assert_relative_eq!(results.max_moment_position, 4.0);
        assert_abs_diff_eq!(results.min_moment, 0.0, epsilon = 1e-9);
        assert_eq!(results.governing_moment(), (results.max_moment, 4.0));
    }

    #[test]
    fn test_extremes_do_not_depend_on_sampling() {
        let loads = vec![Load::Distributed(DistributedLoad::uniform(100.0, 0.0, 10.0).unwrap())];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        for count in [2, 4, 500] {
            let results = AnalysisResults::new(10.0, ReactionMode::Equilibrium, r, &loads, count);
            assert_relative_eq!(results.max_moment, 1250.0, epsilon = 1e-9);
            assert_relative_eq!(results.max_moment_position, 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_shear_under_triangular_load() {
        // 0 -> w over [0, L]: V = 0 at L / sqrt(3)
        let loads = vec![Load::Distributed(DistributedLoad::new(0.0, 12.0, 0.0, 6.0).unwrap())];
        let r = solve_reactions(6.0, &loads, ReactionMode::Equilibrium).unwrap();
        let sections = zero_shear_sections(&r, &loads, 6.0);
        assert_eq!(sections.len(), 1);
        assert_relative_eq!(sections[0], 6.0 / 3f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_shear_steps_at_point_load() {
        let loads = vec![point(100.0, 4.0)];
        let r = solve_reactions(10.0, &loads, ReactionMode::Equilibrium).unwrap();
        assert_relative_eq!(shear_at(&r, &loads, 3.9), 60.0, epsilon = 1e-12);
        assert_relative_eq!(shear_at(&r, &loads, 4.1), -40.0, epsilon = 1e-12);
        // Constant segments with a jump at the load: no interior zero
        assert!(zero_shear_sections(&r, &loads, 10.0).is_empty());
    }
}
