//! Text and JSON rendering of analysis results

use std::fmt::Write;

use beam_core::analysis::{moment_at, sample_stations};
use beam_core::{AnalysisResults, Beam};

const RULE: &str = "═══════════════════════════════════════";

/// Banner-style summary of a solved beam.
///
/// `stations` evenly spaced sections are tabulated; the full sampled diagram
/// is only emitted in the JSON output.
pub fn render_text(
    beam: &Beam,
    results: &AnalysisResults,
    stations: usize,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_text(&mut out, beam, results, stations)?;
    Ok(out)
}

fn write_text(
    out: &mut String,
    beam: &Beam,
    results: &AnalysisResults,
    stations: usize,
) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  BEAM ANALYSIS RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(out, "  Span:     {:.3}", results.length)?;
    writeln!(out, "  Solver:   {}", results.reaction_mode)?;
    writeln!(out, "  Loads:")?;
    for (index, load) in beam.loads().iter().enumerate() {
        writeln!(out, "    [{}] {}", index, load)?;
    }
    if !beam.supports().is_empty() {
        writeln!(out, "  Supports:")?;
        for support in beam.supports() {
            writeln!(out, "    {} at {}", support.kind, support.position)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Reactions:")?;
    writeln!(out, "  R_left  = {:.3}", results.reactions.left)?;
    writeln!(out, "  R_right = {:.3}", results.reactions.right)?;
    writeln!(out)?;
    writeln!(out, "Bending Moment:")?;
    writeln!(
        out,
        "  M_max = {:.3} at x = {:.3}",
        results.max_moment, results.max_moment_position
    )?;
    writeln!(
        out,
        "  M_min = {:.3} at x = {:.3}",
        results.min_moment, results.min_moment_position
    )?;

    let table = sample_stations(results.length, stations);
    if !table.is_empty() {
        writeln!(out)?;
        writeln!(out, "  {:>10}  {:>14}", "x", "M(x)")?;
        for x in table {
            let m = moment_at(&results.reactions, beam.loads(), x);
            writeln!(out, "  {:>10.3}  {:>14.3}", x, m)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    let (governing, position) = results.governing_moment();
    writeln!(out, "  GOVERNING: M = {:.3} at x = {:.3}", governing, position)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Pretty-printed JSON of the results
pub fn render_json(results: &AnalysisResults) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> (Beam, AnalysisResults) {
        let mut beam = Beam::new(10.0);
        beam.add_point_load(100.0, 4.0);
        let results = beam.analyze_with(11).unwrap();
        (beam, results)
    }

    #[test]
    fn text_report_lists_reactions_and_stations() {
        let (beam, results) = solved();
        let text = render_text(&beam, &results, 3).unwrap();

        assert!(text.contains("R_left  = 40.000"));
        assert!(text.contains("R_right = 60.000"));
        assert!(text.contains("[0] Point load 100 at 4"));
        assert!(text.contains("M_max = 160.000 at x = 4.000"));
        assert!(text.contains("5.000"));
    }

    #[test]
    fn zero_stations_skips_the_table() {
        let (beam, results) = solved();
        let text = render_text(&beam, &results, 0).unwrap();
        assert!(!text.contains("M(x)"));
    }

    #[test]
    fn json_carries_the_diagram() {
        let (_, results) = solved();
        let json = render_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["moment_diagram"].as_array().unwrap().len(), 11);
        assert_eq!(value["reactions"]["left"], 40.0);
    }
}
