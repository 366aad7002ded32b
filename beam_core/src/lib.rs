//! # beam_core - Simply-Supported Beam Statics
//!
//! `beam_core` is the computational heart of Beamline: a small model of a
//! 1-D beam on two end supports that solves the support reactions and samples
//! the bending-moment diagram for point loads, distributed loads and applied
//! torques. Front ends (text menus, plots, reports) consume its outputs.
//!
//! ## Design Philosophy
//!
//! - **Owned model**: a [`Beam`] is a plain mutable aggregate; edits arrive as
//!   method calls or [`BeamCommand`]s
//! - **One superposition**: `M(x) = R_left·x - Σ counter_moment_i(x)`, the
//!   reaction baseline applied exactly once
//! - **Rich Errors**: structured [`BeamError`] variants, never silent zeros
//! - **JSON-friendly outputs**: results, loads and commands implement
//!   Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, ReactionMode};
//!
//! let mut beam = Beam::new(10.0);
//! beam.add_point_load(100.0, 4.0);
//! beam.add_uniform_load(5.0, 0.0, 10.0).unwrap();
//!
//! // Full equilibrium includes the distributed load in the reactions
//! beam.settings_mut().reaction_mode = ReactionMode::Equilibrium;
//! let results = beam.analyze().unwrap();
//! assert!((results.reactions.total() - 150.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - The beam model and its edit operations
//! - [`loads`] - Point, distributed and torque loads
//! - [`supports`] - Support descriptors
//! - [`analysis`] - Reaction solver and moment superposition
//! - [`commands`] - Command objects for front ends
//! - [`settings`] - Analysis configuration
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod commands;
pub mod errors;
pub mod loads;
pub mod settings;
pub mod supports;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisResults, Reactions};
pub use beam::Beam;
pub use commands::{BeamCommand, CommandOutcome};
pub use errors::{BeamError, BeamResult};
pub use loads::{DistributedLoad, Load, PointLoad, Torque};
pub use settings::{AnalysisSettings, ReactionMode};
pub use supports::{Support, SupportKind};
