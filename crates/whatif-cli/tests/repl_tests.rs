//! Scripted interactive sessions

use std::io::Cursor;
use whatif_cli::{repl, OutputFormat, WhatIfConfig};
use whatif_core::Session;
use whatif_test_utils::sample_dataset;

fn run_script(script: &str, config: &WhatIfConfig) -> String {
    let dataset = sample_dataset();
    let mut session = Session::new(&dataset);
    let mut out = Vec::new();
    repl::run(&mut session, config, Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_individual_walkthrough() {
    let out = run_script(
        "unit Ventas\n\
         employee Ana\n\
         add individual salary=10\n\
         add individual promotion=yes,salary=50\n\
         compute individual\n",
        &WhatIfConfig::default(),
    );
    assert!(out.contains("unit: Ventas"));
    assert!(out.contains("added individual scenario 2"));
    let row = out.lines().find(|l| l.starts_with("Ana")).unwrap();
    assert!(row.contains("0.800 (high)"), "{row}");
    assert!(row.contains("0.780 (high)"), "{row}");
    assert!(row.contains("0.600 (medium)"), "{row}");
}

#[test]
fn test_sixth_add_warns_and_session_continues() {
    let script = "add individual\n".repeat(6) + "show\n";
    let out = run_script(&script, &WhatIfConfig::default());
    assert_eq!(out.matches("added individual scenario").count(), 5);
    assert!(out.contains("warning: at most 5 scenarios can be added"));
    assert!(out.contains("individual scenarios (5/5):"));
}

#[test]
fn test_reset_discards_results() {
    let out = run_script(
        "add structural leadership=4\n\
         reset all\n\
         compute structural\n",
        &WhatIfConfig::default(),
    );
    assert!(out.contains("reset (1 scenarios dropped)"));
    assert!(out.contains("no results"));
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let out = run_script(
        "unit Marketing\n\
         set individual 1 salary 10\n\
         add individual bonus=3\n\
         frobnicate\n\
         add individual\n\
         set individual 1 salary 80\n\
         show\n",
        &WhatIfConfig::default(),
    );
    assert!(out.contains("error: unknown unit: 'Marketing'"));
    assert!(out.contains("error: scenario index 0 out of range"));
    assert!(out.contains("error: invalid scenario argument: unknown field 'bonus'"));
    assert!(out.contains("error: unknown command: 'frobnicate'"));
    // salary is clamped to the 50% ceiling
    assert!(out.contains("Scenario 1: promotion=no salary=50.0%"));
}

#[test]
fn test_structural_json_output() {
    let config = WhatIfConfig {
        output: OutputFormat::Json,
        ..WhatIfConfig::default()
    };
    let out = run_script(
        "unit IT\n\
         add structural\n\
         set structural 1 leadership 5\n\
         compute structural\n\
         quit\n\
         compute structural\n",
        &config,
    );
    let start = out.find('{').unwrap();
    let end = out.rfind('}').unwrap();
    let json: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(json["kind"], "structural");
    assert_eq!(json["columns"][1], "Scenario 1");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    let factor = json["factors"]["IT"][0].as_f64().unwrap();
    assert!((factor + 0.05).abs() < 1e-9);
    // nothing after quit
    assert_eq!(out.matches("\"kind\"").count(), 1);
}
