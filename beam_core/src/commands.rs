//! # Beam Commands
//!
//! Front ends do not poke at a beam's collections directly. They build a
//! [`BeamCommand`] from whatever the user did (typed a value, clicked a list
//! row, dragged a marker) and hand it to [`Beam::apply`]. The front end keeps
//! only the beam plus its own transient interaction state.
//!
//! Commands are JSON-serializable so a scripted driver can replay them.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::commands::{BeamCommand, CommandOutcome};
//!
//! let mut beam = Beam::new(10.0);
//! beam.apply(BeamCommand::AddPointLoad { magnitude: 100.0, position: 4.0 }).unwrap();
//!
//! match beam.apply(BeamCommand::Recompute { sample_count: Some(11) }).unwrap() {
//!     CommandOutcome::Analysis(results) => assert_eq!(results.reactions.left, 40.0),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResults;
use crate::beam::Beam;
use crate::errors::BeamResult;
use crate::supports::SupportKind;

/// One user-level edit or request against a [`Beam`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum BeamCommand {
    /// Change the span length
    SetLength { length: f64 },

    /// Append a point load
    AddPointLoad { magnitude: f64, position: f64 },

    /// Append a distributed load (uniform when both intensities match)
    AddDistributedLoad {
        intensity_start: f64,
        intensity_end: f64,
        start: f64,
        end: f64,
    },

    /// Append an applied torque
    AddTorque { magnitude: f64, position: f64 },

    /// Append a support
    AddSupport { kind: SupportKind, position: f64 },

    /// Remove point loads near a position; `None` uses the beam's default tolerance
    RemovePointLoad {
        position: f64,
        #[serde(default)]
        tolerance: Option<f64>,
    },

    /// Remove the load at a list index
    RemoveLoad { index: usize },

    /// Drag the point load nearest `from` to `to`
    MovePointLoad { from: f64, to: f64, tolerance: f64 },

    /// Drop every load and support
    Clear,

    /// Solve and sample; `None` uses the beam's configured sample count
    Recompute {
        #[serde(default)]
        sample_count: Option<usize>,
    },
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The edit was applied
    Applied,
    /// Number of loads removed (zero when nothing matched)
    Removed(usize),
    /// Whether a load was found and moved
    Moved(bool),
    /// Fresh analysis results
    Analysis(AnalysisResults),
}

impl Beam {
    /// Apply a command.
    ///
    /// A command that fails returns the error and leaves the beam exactly as
    /// it was.
    pub fn apply(&mut self, command: BeamCommand) -> BeamResult<CommandOutcome> {
        let outcome = match command {
            BeamCommand::SetLength { length } => {
                self.set_length(length);
                CommandOutcome::Applied
            }
            BeamCommand::AddPointLoad {
                magnitude,
                position,
            } => {
                self.add_point_load(magnitude, position);
                CommandOutcome::Applied
            }
            BeamCommand::AddDistributedLoad {
                intensity_start,
                intensity_end,
                start,
                end,
            } => {
                self.add_distributed_load(intensity_start, intensity_end, start, end)?;
                CommandOutcome::Applied
            }
            BeamCommand::AddTorque {
                magnitude,
                position,
            } => {
                self.add_torque(magnitude, position);
                CommandOutcome::Applied
            }
            BeamCommand::AddSupport { kind, position } => {
                self.add_support(kind, position);
                CommandOutcome::Applied
            }
            BeamCommand::RemovePointLoad {
                position,
                tolerance,
            } => {
                let tolerance = tolerance.unwrap_or(self.settings().removal_tolerance);
                CommandOutcome::Removed(self.remove_point_load_within(position, tolerance))
            }
            BeamCommand::RemoveLoad { index } => {
                CommandOutcome::Removed(usize::from(self.remove_load(index).is_some()))
            }
            BeamCommand::MovePointLoad {
                from,
                to,
                tolerance,
            } => CommandOutcome::Moved(self.move_point_load(from, to, tolerance)),
            BeamCommand::Clear => {
                self.clear();
                CommandOutcome::Applied
            }
            BeamCommand::Recompute { sample_count } => {
                let count = sample_count.unwrap_or(self.settings().sample_count);
                CommandOutcome::Analysis(self.analyze_with(count)?)
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BeamError;

    #[test]
    fn test_failed_command_leaves_state() {
        let mut beam = Beam::new(10.0);
        beam.apply(BeamCommand::AddPointLoad {
            magnitude: 1.0,
            position: 2.0,
        })
        .unwrap();
        let snapshot = beam.clone();

        let err = beam
            .apply(BeamCommand::AddDistributedLoad {
                intensity_start: 1.0,
                intensity_end: 1.0,
                start: 5.0,
                end: 5.0,
            })
            .unwrap_err();
        assert_eq!(err, BeamError::invalid_range(5.0, 5.0));
        assert_eq!(beam, snapshot);
    }

    #[test]
    fn test_remove_outcomes() {
        let mut beam = Beam::new(10.0);
        beam.add_point_load(1.0, 3.0);
        beam.add_point_load(1.0, 3.04);
        assert_eq!(
            beam.apply(BeamCommand::RemovePointLoad {
                position: 3.0,
                tolerance: None
            }),
            Ok(CommandOutcome::Removed(2))
        );
        assert_eq!(
            beam.apply(BeamCommand::RemoveLoad { index: 0 }),
            Ok(CommandOutcome::Removed(0))
        );
    }

    #[test]
    fn test_drag_then_recompute() {
        let mut beam = Beam::new(10.0);
        beam.add_point_load(100.0, 4.0);
        let moved = beam
            .apply(BeamCommand::MovePointLoad {
                from: 4.1,
                to: 5.0,
                tolerance: 0.2,
            })
            .unwrap();
        assert_eq!(moved, CommandOutcome::Moved(true));

        match beam.apply(BeamCommand::Recompute { sample_count: Some(3) }).unwrap() {
            CommandOutcome::Analysis(results) => {
                assert_eq!(results.moment_diagram.len(), 3);
                assert_eq!(results.reactions.left, 50.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_recompute_on_empty_beam_fails() {
        let mut beam = Beam::new(10.0);
        assert_eq!(
            beam.apply(BeamCommand::Recompute { sample_count: None }),
            Err(BeamError::EmptyLoadSet)
        );
    }

    #[test]
    fn test_command_json() {
        let json = r#"{"command":"AddSupport","kind":"Roller","position":10.0}"#;
        let command: BeamCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            BeamCommand::AddSupport {
                kind: SupportKind::Roller,
                position: 10.0
            }
        );

        let recompute: BeamCommand = serde_json::from_str(r#"{"command":"Recompute"}"#).unwrap();
        assert_eq!(recompute, BeamCommand::Recompute { sample_count: None });
    }
}
