//! Scenario arguments
//!
//! Scenarios are typed as comma-separated `key=value` lists, e.g.
//! `promotion=yes,salary=10` or `leadership=4.2,training=3.5`. Keys left out
//! keep the starting value of the new scenario.

use crate::error::{ArgError, CliError};
use whatif_core::{AddOutcome, IndividualEdit, Session, StructuralEdit};

const INDIVIDUAL_KEYS: &str = "promotion, salary";
const STRUCTURAL_KEYS: &str = "leadership, compensation, training";

/// Parse a yes/no value
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "si" | "sí" | "1" | "on" => Some(true),
        "false" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ArgError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ArgError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Parse one individual field
///
/// # Errors
///
/// Returns [`ArgError`] on an unknown key or unparsable value.
pub fn parse_individual_field(key: &str, value: &str) -> Result<IndividualEdit, ArgError> {
    match key.trim().to_lowercase().as_str() {
        "promotion" | "promoted" | "ascenso" => parse_bool(value)
            .map(IndividualEdit::Promotion)
            .ok_or_else(|| ArgError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
        "salary" | "salary_increase_pct" | "aumento" => {
            let pct = parse_number(key, value.trim().trim_end_matches('%'))?;
            Ok(IndividualEdit::SalaryIncreasePct(pct))
        }
        _ => Err(ArgError::UnknownField {
            key: key.to_string(),
            expected: INDIVIDUAL_KEYS,
        }),
    }
}

/// Parse one structural field
///
/// # Errors
///
/// Returns [`ArgError`] on an unknown key or unparsable value.
pub fn parse_structural_field(key: &str, value: &str) -> Result<StructuralEdit, ArgError> {
    let v = parse_number(key, value)?;
    match key.trim().to_lowercase().as_str() {
        "leadership" | "liderazgo" => Ok(StructuralEdit::Leadership(v)),
        "compensation" | "salario_beneficios" => Ok(StructuralEdit::Compensation(v)),
        "training" | "formacion" | "formación" => Ok(StructuralEdit::Training(v)),
        _ => Err(ArgError::UnknownField {
            key: key.to_string(),
            expected: STRUCTURAL_KEYS,
        }),
    }
}

fn pairs(spec: &str) -> impl Iterator<Item = Result<(&str, &str), ArgError>> {
    spec.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.split_once('=')
                .ok_or_else(|| ArgError::MissingValue(item.to_string()))
        })
}

/// Parse a full individual spec into edits
///
/// # Errors
///
/// Returns the first [`ArgError`] encountered.
pub fn parse_individual_spec(spec: &str) -> Result<Vec<IndividualEdit>, ArgError> {
    pairs(spec)
        .map(|pair| pair.and_then(|(k, v)| parse_individual_field(k, v)))
        .collect()
}

/// Parse a full structural spec into edits
///
/// # Errors
///
/// Returns the first [`ArgError`] encountered.
pub fn parse_structural_spec(spec: &str) -> Result<Vec<StructuralEdit>, ArgError> {
    pairs(spec)
        .map(|pair| pair.and_then(|(k, v)| parse_structural_field(k, v)))
        .collect()
}

/// Parse a 1-based scenario number into a 0-based index
///
/// # Errors
///
/// Returns [`ArgError::InvalidNumber`] for zero or non-integers.
pub fn parse_scenario_number(s: &str) -> Result<usize, ArgError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ArgError::InvalidNumber(s.to_string())),
    }
}

/// Add an individual scenario and apply `spec` to it.
///
/// The spec is parsed before anything is added, so a bad spec leaves the
/// session unchanged.
///
/// # Errors
///
/// Returns [`CliError`] when the spec does not parse.
pub fn add_individual_from_spec(session: &mut Session<'_>, spec: &str) -> Result<AddOutcome, CliError> {
    let edits = parse_individual_spec(spec)?;
    let outcome = session.add_individual();
    if let AddOutcome::Added { index } = outcome {
        for edit in edits {
            session.edit_individual(index, edit)?;
        }
    }
    Ok(outcome)
}

/// Add a structural scenario and apply `spec` to it
///
/// # Errors
///
/// Returns [`CliError`] when the spec does not parse.
pub fn add_structural_from_spec(session: &mut Session<'_>, spec: &str) -> Result<AddOutcome, CliError> {
    let edits = parse_structural_spec(spec)?;
    let outcome = session.add_structural();
    if let AddOutcome::Added { index } = outcome {
        for edit in edits {
            session.edit_structural(index, edit)?;
        }
    }
    Ok(outcome)
}
