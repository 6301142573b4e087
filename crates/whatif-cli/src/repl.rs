//! Interactive session
//!
//! A line-oriented loop over any reader and writer. Each line is one
//! request; the response is written before the next line is read. A failing
//! command prints its error and the loop continues.

use crate::args::{
    add_individual_from_spec, add_structural_from_spec, parse_individual_field,
    parse_scenario_number, parse_structural_field,
};
use crate::config::{OutputFormat, WhatIfConfig};
use crate::error::CliError;
use crate::render;
use std::io::{self, BufRead, Write};
use whatif_core::query::{individual_results_with, structural_results_with};
use whatif_core::{EmployeeFilter, Session, UnitFilter};

const HELP: &str = "\
commands:
  units                                 list units
  employees                             list employees in the selected unit
  unit <name|all>                       select a unit
  employee <name|all>                   select an employee
  add individual [promotion=..,salary=..]
  add structural [leadership=..,compensation=..,training=..]
  set individual <n> <field> <value>    edit scenario n
  set structural <n> <field> <value>
  reset individual|structural|all       drop scenarios
  show                                  show selection and scenarios
  compute individual|structural         print results
  help
  quit";

/// Scenario kind named in a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Individual scenarios
    Individual,
    /// Structural scenarios
    Structural,
}

impl Scope {
    fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "individual" | "ind" | "i" => Some(Self::Individual),
            "structural" | "str" | "s" => Some(Self::Structural),
            _ => None,
        }
    }
}

/// One parsed interactive command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List units
    Units,
    /// List employees under the unit filter
    Employees,
    /// Select a unit
    SelectUnit(UnitFilter),
    /// Select an employee
    SelectEmployee(EmployeeFilter),
    /// Add a scenario with an optional spec
    Add(Scope, String),
    /// Edit one field of a scenario (0-based index)
    Set {
        /// Scenario kind
        scope: Scope,
        /// 0-based index
        index: usize,
        /// Field name as typed
        field: String,
        /// Value as typed
        value: String,
    },
    /// Reset one or both lists
    Reset(Option<Scope>),
    /// Show the session
    Show,
    /// Print results
    Compute(Scope),
    /// Print help
    Help,
    /// Leave the loop
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match head.to_lowercase().as_str() {
            "units" => Self::Units,
            "employees" => Self::Employees,
            "unit" => {
                if rest.is_empty() {
                    return Err(CliError::Usage("unit <name|all>"));
                }
                Self::SelectUnit(rest.parse().unwrap_or_default())
            }
            "employee" => {
                if rest.is_empty() {
                    return Err(CliError::Usage("employee <name|all>"));
                }
                Self::SelectEmployee(rest.parse().unwrap_or_default())
            }
            "add" => {
                let (scope, spec) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let scope =
                    Scope::parse(scope).ok_or(CliError::Usage("add individual|structural [spec]"))?;
                Self::Add(scope, spec.trim().to_string())
            }
            "set" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                let [scope, number, field, value] = parts.as_slice() else {
                    return Err(CliError::Usage("set individual|structural <n> <field> <value>"));
                };
                let scope = Scope::parse(scope)
                    .ok_or(CliError::Usage("set individual|structural <n> <field> <value>"))?;
                Self::Set {
                    scope,
                    index: parse_scenario_number(number)?,
                    field: (*field).to_string(),
                    value: (*value).to_string(),
                }
            }
            "reset" => match rest.to_lowercase().as_str() {
                "" | "all" => Self::Reset(None),
                other => Self::Reset(Some(
                    Scope::parse(other).ok_or(CliError::Usage("reset individual|structural|all"))?,
                )),
            },
            "show" => Self::Show,
            "compute" => Self::Compute(
                Scope::parse(rest).ok_or(CliError::Usage("compute individual|structural"))?,
            ),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CliError::UnknownCommand(head.to_string())),
        };
        Ok(Some(command))
    }
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop
    Quit,
}

/// Execute one command against the session, returning the response text
///
/// # Errors
///
/// Returns [`CliError`] when the command cannot be applied.
pub fn execute(
    command: Command,
    session: &mut Session<'_>,
    config: &WhatIfConfig,
) -> Result<(String, Flow), CliError> {
    let text = match command {
        Command::Units => render::render_units(session.dataset()),
        Command::Employees => render::render_employees(session),
        Command::SelectUnit(unit) => {
            session.select_unit(unit)?;
            format!("unit: {}\n", session.selection().unit)
        }
        Command::SelectEmployee(employee) => {
            session.select_employee(employee)?;
            format!("employee: {}\n", session.selection().employee)
        }
        Command::Add(Scope::Individual, spec) => {
            let outcome = add_individual_from_spec(session, &spec)?;
            format!("{}\n", render::add_outcome_line("individual", outcome))
        }
        Command::Add(Scope::Structural, spec) => {
            let outcome = add_structural_from_spec(session, &spec)?;
            format!("{}\n", render::add_outcome_line("structural", outcome))
        }
        Command::Set {
            scope: Scope::Individual,
            index,
            field,
            value,
        } => {
            session.edit_individual(index, parse_individual_field(&field, &value)?)?;
            format!("updated individual scenario {}\n", index + 1)
        }
        Command::Set {
            scope: Scope::Structural,
            index,
            field,
            value,
        } => {
            session.edit_structural(index, parse_structural_field(&field, &value)?)?;
            format!("updated structural scenario {}\n", index + 1)
        }
        Command::Reset(scope) => {
            let mut dropped = 0;
            if scope != Some(Scope::Structural) {
                dropped += session.reset_individual();
            }
            if scope != Some(Scope::Individual) {
                dropped += session.reset_structural();
            }
            format!("reset ({dropped} scenarios dropped)\n")
        }
        Command::Show => render::render_session(session),
        Command::Compute(scope) => {
            let table = match scope {
                Scope::Individual => individual_results_with(session, &config.severity),
                Scope::Structural => structural_results_with(session, &config.severity),
            };
            match table {
                None => "no results (no scenarios or nothing selected)\n".to_string(),
                Some(table) => match config.output {
                    OutputFormat::Text => render::render_table(&table),
                    OutputFormat::Json => render::render_json(&table)
                        .map(|json| json + "\n")
                        .unwrap_or_else(|e| format!("error: {e}\n")),
                },
            }
        }
        Command::Help => format!("{HELP}\n"),
        Command::Quit => return Ok((String::new(), Flow::Quit)),
    };
    Ok((text, Flow::Continue))
}

/// Run the loop until `quit` or end of input
///
/// # Errors
///
/// Returns IO errors from reading or writing.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    config: &WhatIfConfig,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let result = Command::parse(&line)
            .and_then(|cmd| cmd.map(|c| execute(c, session, config)).transpose());
        match result {
            Ok(Some((text, flow))) => {
                output.write_all(text.as_bytes())?;
                if flow == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                writeln!(output, "error: {e}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(Command::parse("# note").unwrap(), None);
        assert_eq!(
            Command::parse("unit all").unwrap(),
            Some(Command::SelectUnit(UnitFilter::All))
        );
        assert_eq!(
            Command::parse("unit Atención al Cliente").unwrap(),
            Some(Command::SelectUnit(UnitFilter::named("Atención al Cliente")))
        );
        assert_eq!(
            Command::parse("add individual promotion=yes,salary=10").unwrap(),
            Some(Command::Add(Scope::Individual, "promotion=yes,salary=10".into()))
        );
        assert_eq!(
            Command::parse("set s 2 leadership 4.5").unwrap(),
            Some(Command::Set {
                scope: Scope::Structural,
                index: 1,
                field: "leadership".into(),
                value: "4.5".into(),
            })
        );
        assert_eq!(Command::parse("reset").unwrap(), Some(Command::Reset(None)));
        assert_eq!(
            Command::parse("reset individual").unwrap(),
            Some(Command::Reset(Some(Scope::Individual)))
        );
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(matches!(
            Command::parse("frobnicate"),
            Err(CliError::UnknownCommand(_))
        ));
        assert!(matches!(Command::parse("set i 1 salary"), Err(CliError::Usage(_))));
        assert!(matches!(Command::parse("set i 0 salary 3"), Err(CliError::Arg(_))));
        assert!(matches!(Command::parse("compute"), Err(CliError::Usage(_))));
    }
}
