//! Interactive text menu over a [`Beam`]

use std::io::{BufRead, Write};

use beam_core::{Beam, BeamCommand, CommandOutcome};
use log::{debug, warn};

use crate::error::Result;
use crate::report;

const MENU: &str = "\
1) Add point load
2) Add distributed load
3) Add torque
4) Remove point load
5) List loads
6) Set length
7) Calculate
8) Clear
0) Quit";

/// A menu session reading from `input` and writing to `output`
pub struct Session<R, W> {
    beam: Beam,
    input: R,
    output: W,
    stations: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(beam: Beam, input: R, output: W, stations: usize) -> Self {
        Session {
            beam,
            input,
            output,
            stations,
        }
    }

    pub fn into_beam(self) -> Beam {
        self.beam
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choice: ")? else {
                return Ok(());
            };
            let keep_going = match choice.as_str() {
                "1" => self.add_point_load()?,
                "2" => self.add_distributed_load()?,
                "3" => self.add_torque()?,
                "4" => self.remove_point_load()?,
                "5" => self.list_loads()?,
                "6" => self.set_length()?,
                "7" => self.calculate()?,
                "8" => {
                    self.execute(BeamCommand::Clear)?;
                    writeln!(self.output, "All loads and supports cleared.")?;
                    true
                }
                "0" | "q" | "quit" => return Ok(()),
                other => {
                    writeln!(self.output, "Unknown option '{}'.", other)?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    fn add_point_load(&mut self) -> Result<bool> {
        let Some(magnitude) = self.prompt_f64("Magnitude: ")? else {
            return Ok(false);
        };
        let Some(position) = self.prompt_f64("Position: ")? else {
            return Ok(false);
        };
        self.execute(BeamCommand::AddPointLoad {
            magnitude,
            position,
        })?;
        Ok(true)
    }

    fn add_distributed_load(&mut self) -> Result<bool> {
        let Some(intensity_start) = self.prompt_f64("Intensity at start: ")? else {
            return Ok(false);
        };
        let Some(intensity_end) = self.prompt_f64("Intensity at end: ")? else {
            return Ok(false);
        };
        let Some(start) = self.prompt_f64("Start position: ")? else {
            return Ok(false);
        };
        let Some(end) = self.prompt_f64("End position: ")? else {
            return Ok(false);
        };
        self.execute(BeamCommand::AddDistributedLoad {
            intensity_start,
            intensity_end,
            start,
            end,
        })?;
        Ok(true)
    }

    fn add_torque(&mut self) -> Result<bool> {
        let Some(magnitude) = self.prompt_f64("Torque (positive clockwise): ")? else {
            return Ok(false);
        };
        let Some(position) = self.prompt_f64("Position: ")? else {
            return Ok(false);
        };
        self.execute(BeamCommand::AddTorque {
            magnitude,
            position,
        })?;
        Ok(true)
    }

    fn remove_point_load(&mut self) -> Result<bool> {
        let Some(position) = self.prompt_f64("Position of the point load: ")? else {
            return Ok(false);
        };
        let outcome = self.execute(BeamCommand::RemovePointLoad {
            position,
            tolerance: None,
        })?;
        if let Some(CommandOutcome::Removed(count)) = outcome {
            if count == 0 {
                writeln!(self.output, "No point load near {}.", position)?;
            } else {
                writeln!(self.output, "Removed {} point load(s).", count)?;
            }
        }
        Ok(true)
    }

    fn list_loads(&mut self) -> Result<bool> {
        writeln!(self.output, "Length: {}", self.beam.length())?;
        if self.beam.is_unloaded() {
            writeln!(self.output, "No loads.")?;
        }
        for (index, load) in self.beam.loads().iter().enumerate() {
            writeln!(self.output, "  [{}] {}", index, load)?;
        }
        Ok(true)
    }

    fn set_length(&mut self) -> Result<bool> {
        let Some(length) = self.prompt_f64("New length: ")? else {
            return Ok(false);
        };
        self.execute(BeamCommand::SetLength { length })?;
        Ok(true)
    }

    fn calculate(&mut self) -> Result<bool> {
        if let Some(CommandOutcome::Analysis(results)) =
            self.execute(BeamCommand::Recompute { sample_count: None })?
        {
            let text = report::render_text(&self.beam, &results, self.stations)?;
            write!(self.output, "{}", text)?;
        }
        Ok(true)
    }

    /// Apply a command, reporting beam errors to the user instead of failing
    fn execute(&mut self, command: BeamCommand) -> Result<Option<CommandOutcome>> {
        debug!("applying {:?}", command);
        match self.beam.apply(command) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) => {
                warn!("command rejected: {}", e);
                writeln!(self.output, "Error: {}", e)?;
                Ok(None)
            }
        }
    }

    /// One trimmed line, or `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until a number is entered; `None` at end of input
    fn prompt_f64(&mut self, label: &str) -> Result<Option<f64>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match text.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "'{}' is not a number, try again.", text)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(beam: Beam, script: &str) -> (Beam, String) {
        let mut output = Vec::new();
        let mut session = Session::new(beam, Cursor::new(script.as_bytes()), &mut output, 3);
        session.run().unwrap();
        let beam = session.into_beam();
        (beam, String::from_utf8(output).unwrap())
    }

    #[test]
    fn adds_loads_and_calculates() {
        let (beam, output) = run_script(Beam::new(10.0), "1\n100\n4\n7\n0\n");
        assert_eq!(beam.loads().len(), 1);
        assert!(output.contains("R_left  = 40.000"));
    }

    #[test]
    fn retries_bad_numbers() {
        let (beam, output) = run_script(Beam::new(10.0), "1\nabc\n100\n4\n0\n");
        assert!(output.contains("'abc' is not a number"));
        assert_eq!(beam.point_loads().count(), 1);
    }

    #[test]
    fn reports_rejected_commands_and_continues() {
        let (beam, output) = run_script(Beam::new(10.0), "2\n5\n5\n6\n2\n7\n0\n");
        assert!(output.contains("Error: Invalid range"));
        assert!(output.contains("Error: No loads"));
        assert!(beam.is_unloaded());
    }

    #[test]
    fn removes_and_clears() {
        let mut beam = Beam::new(10.0);
        beam.add_point_load(10.0, 2.0);
        beam.add_point_load(10.0, 5.0);
        let (beam, output) = run_script(beam, "4\n2.05\n4\n9\n5\n8\n");
        assert!(output.contains("Removed 1 point load(s)."));
        assert!(output.contains("No point load near 9."));
        assert!(output.contains("[0] Point load 10 at 5"));
        assert!(beam.is_unloaded());
    }

    #[test]
    fn stops_at_end_of_input() {
        let (beam, _) = run_script(Beam::new(10.0), "6\n");
        assert_eq!(beam.length(), 10.0);
    }
}
