//! Text and JSON rendering

use std::fmt::Write;
use whatif_core::query::AnalysisKind;
use whatif_core::{AddOutcome, Dataset, ResultTable, Session, MAX_SCENARIOS};

/// Message shown when an add is rejected
pub fn capacity_warning() -> String {
    format!("warning: at most {MAX_SCENARIOS} scenarios can be added")
}

/// Short line describing an add outcome
pub fn add_outcome_line(kind: &str, outcome: AddOutcome) -> String {
    match outcome {
        AddOutcome::Added { index } => format!("added {kind} scenario {}", index + 1),
        AddOutcome::CapacityReached => capacity_warning(),
    }
}

fn cell_text(probability: f64, severity: whatif_core::Severity) -> String {
    format!("{probability:.3} ({severity})")
}

/// Aligned text table
#[must_use]
pub fn render_table(table: &ResultTable) -> String {
    let mut headers = vec!["Employee".to_string(), "Unit".to_string()];
    headers.extend(table.columns.iter().cloned());

    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut line = vec![row.name.clone(), row.unit.clone()];
            line.extend(row.cells.iter().map(|c| cell_text(c.probability, c.severity)));
            line
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            body.iter()
                .filter_map(|line| line.get(i))
                .chain(std::iter::once(&headers[i]))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for line in &body {
        push_line(&mut out, line, &widths);
    }

    if table.kind == AnalysisKind::Structural && !table.factors.is_empty() {
        out.push('\n');
        out.push_str("Probability change per unit:\n");
        for (unit, factors) in &table.factors {
            let list: Vec<String> = factors.iter().map(|f| format!("{f:+.3}")).collect();
            let _ = writeln!(out, "  {unit}: {}", list.join(", "));
        }
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Pretty JSON of a table
///
/// # Errors
///
/// Returns the serializer error, which only occurs for non-string map keys.
pub fn render_json(table: &ResultTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

/// Unit listing with head count and baseline scores
#[must_use]
pub fn render_units(dataset: &Dataset) -> String {
    let mut out = String::new();
    for unit in dataset.units() {
        let count = dataset.employees_in(unit).count();
        match dataset.unit_baseline(unit) {
            Some(s) => {
                let _ = writeln!(
                    out,
                    "{unit} ({count} employees) leadership={:.1} compensation={:.1} training={:.1}",
                    s.leadership, s.compensation, s.training
                );
            }
            None => {
                let _ = writeln!(out, "{unit} ({count} employees) no climate scores");
            }
        }
    }
    out
}

/// Employees visible under the session's unit filter
#[must_use]
pub fn render_employees(session: &Session<'_>) -> String {
    let mut out = String::new();
    for record in session.employee_options() {
        let _ = writeln!(
            out,
            "{} [{}] base={:.3}",
            record.name, record.unit, record.base_probability
        );
    }
    out
}

/// Current selection and scenario lists
#[must_use]
pub fn render_session(session: &Session<'_>) -> String {
    let mut out = String::new();
    let selection = session.selection();
    let _ = writeln!(out, "unit: {}", selection.unit);
    let _ = writeln!(out, "employee: {}", selection.employee);

    let _ = writeln!(out, "individual scenarios ({}/{MAX_SCENARIOS}):", session.individual().len());
    for (i, s) in session.individual().iter().enumerate() {
        let _ = writeln!(
            out,
            "  Scenario {}: promotion={} salary={:.1}%",
            i + 1,
            if s.promotion { "yes" } else { "no" },
            s.salary_increase_pct
        );
    }

    let _ = writeln!(out, "structural scenarios ({}/{MAX_SCENARIOS}):", session.structural().len());
    for (i, s) in session.structural().iter().enumerate() {
        let _ = writeln!(
            out,
            "  Scenario {}: leadership={:.1} compensation={:.1} training={:.1}",
            i + 1,
            s.scores.leadership,
            s.scores.compensation,
            s.scores.training
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use whatif_core::{ClimateScores, EmployeeRecord};

    #[test]
    fn table_layout() {
        let ds = Dataset::new(vec![EmployeeRecord::new("Ana", "Ventas", 0.8)]);
        let mut session = Session::new(&ds);
        session.add_individual();
        let table = whatif_core::individual_results(&session).unwrap();
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Employee  Unit    Base          Scenario 1");
        assert_eq!(lines[2], "Ana       Ventas  0.800 (high)  0.800 (high)");
    }

    #[test]
    fn units_listing() {
        let ds = Dataset::new(vec![
            EmployeeRecord::new("Ana", "Ventas", 0.8)
                .with_climate(ClimateScores::new(3.0, 2.0, 4.0)),
            EmployeeRecord::new("Luis", "IT", 0.3),
        ]);
        let text = render_units(&ds);
        assert_eq!(
            text,
            "IT (1 employees) no climate scores\n\
             Ventas (1 employees) leadership=3.0 compensation=2.0 training=4.0\n"
        );
    }

    #[test]
    fn employees_with_shared_name_list_their_own_unit() {
        let ds = Dataset::new(vec![
            EmployeeRecord::new("Ana", "Ventas", 0.8),
            EmployeeRecord::new("Ana", "IT", 0.3),
        ]);
        let mut session = Session::new(&ds);
        assert_eq!(
            render_employees(&session),
            "Ana [Ventas] base=0.800\nAna [IT] base=0.300\n"
        );
        session
            .select_unit(whatif_core::UnitFilter::named("IT"))
            .unwrap();
        assert_eq!(render_employees(&session), "Ana [IT] base=0.300\n");
    }

    #[test]
    fn outcome_lines() {
        assert_eq!(
            add_outcome_line("individual", AddOutcome::Added { index: 0 }),
            "added individual scenario 1"
        );
        assert!(add_outcome_line("individual", AddOutcome::CapacityReached).starts_with("warning:"));
    }
}
