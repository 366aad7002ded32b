use beam_core::{BeamCommand, ReactionMode, SupportKind};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Beamline CLI - support reactions and bending moment diagrams for simply-supported beams.",
    after_help = "Loads are comma separated, e.g. `--point 100,4 --udl 5,1,4 --linear 0,6,2,8 --torque 20,3`."
)]
pub struct Cli {
    /// Beam span length
    #[arg(short = 'L', long, value_name = "LENGTH", allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Point load as MAGNITUDE,POSITION (repeatable)
    #[arg(short, long = "point", value_name = "M,X", value_parser = parse_point, allow_hyphen_values = true)]
    pub points: Vec<PointArg>,

    /// Uniform distributed load as INTENSITY,START,END (repeatable)
    #[arg(short, long = "udl", value_name = "W,A,B", value_parser = parse_uniform, allow_hyphen_values = true)]
    pub uniform: Vec<DistributedArg>,

    /// Linearly varying load as W_START,W_END,START,END (repeatable)
    #[arg(long = "linear", value_name = "W1,W2,A,B", value_parser = parse_linear, allow_hyphen_values = true)]
    pub linear: Vec<DistributedArg>,

    /// Applied torque as MAGNITUDE,POSITION (repeatable)
    #[arg(short, long = "torque", value_name = "M,X", value_parser = parse_point, allow_hyphen_values = true)]
    pub torques: Vec<PointArg>,

    /// Support as KIND,POSITION where KIND is pin, roller or fixed (repeatable)
    #[arg(short, long = "support", value_name = "KIND,X", value_parser = parse_support)]
    pub supports: Vec<SupportArg>,

    /// Reaction solver: `reference` (point loads only) or `equilibrium` (all loads)
    #[arg(short, long, value_name = "MODE", default_value = "reference")]
    pub mode: ReactionMode,

    /// Number of stations in the sampled moment diagram
    #[arg(long, value_name = "COUNT", default_value_t = beam_core::settings::DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// Number of evenly spaced stations printed in the text report
    #[arg(long, value_name = "COUNT", default_value_t = 11)]
    pub stations: usize,

    /// Print the analysis results as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Start the interactive menu after applying any loads given on the command line
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Loads and supports from the command line, as commands for the beam
    pub fn commands(&self) -> Vec<BeamCommand> {
        let points = self.points.iter().map(|p| BeamCommand::AddPointLoad {
            magnitude: p.magnitude,
            position: p.position,
        });
        let distributed = self.uniform.iter().chain(&self.linear).map(|d| {
            BeamCommand::AddDistributedLoad {
                intensity_start: d.intensity_start,
                intensity_end: d.intensity_end,
                start: d.start,
                end: d.end,
            }
        });
        let torques = self.torques.iter().map(|t| BeamCommand::AddTorque {
            magnitude: t.magnitude,
            position: t.position,
        });
        let supports = self.supports.iter().map(|s| BeamCommand::AddSupport {
            kind: s.kind,
            position: s.position,
        });
        points.chain(distributed).chain(torques).chain(supports).collect()
    }
}

/// A magnitude at a position (point loads and torques)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointArg {
    pub magnitude: f64,
    pub position: f64,
}

/// Distributed load bounds and intensities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributedArg {
    pub intensity_start: f64,
    pub intensity_end: f64,
    pub start: f64,
    pub end: f64,
}

/// Support kind at a position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportArg {
    pub kind: SupportKind,
    pub position: f64,
}

/// Split `s` on commas into exactly `count` numbers
pub fn parse_numbers(s: &str, count: usize) -> Result<Vec<f64>, String> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != count {
        return Err(format!(
            "expected {} comma separated values, found {}",
            count,
            values.len()
        ));
    }
    Ok(values)
}

fn parse_point(s: &str) -> Result<PointArg, String> {
    let v = parse_numbers(s, 2)?;
    Ok(PointArg {
        magnitude: v[0],
        position: v[1],
    })
}

fn parse_uniform(s: &str) -> Result<DistributedArg, String> {
    let v = parse_numbers(s, 3)?;
    Ok(DistributedArg {
        intensity_start: v[0],
        intensity_end: v[0],
        start: v[1],
        end: v[2],
    })
}

fn parse_linear(s: &str) -> Result<DistributedArg, String> {
    let v = parse_numbers(s, 4)?;
    Ok(DistributedArg {
        intensity_start: v[0],
        intensity_end: v[1],
        start: v[2],
        end: v[3],
    })
}

fn parse_support(s: &str) -> Result<SupportArg, String> {
    let (kind, position) = s
        .split_once(',')
        .ok_or_else(|| format!("expected KIND,POSITION, found '{}'", s))?;
    let position = position
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", position.trim()))?;
    Ok(SupportArg {
        kind: kind.parse()?,
        position,
    })
}
