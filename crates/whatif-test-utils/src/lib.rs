//! Testing utilities for the what-if workspace
//!
//! Shared fixtures: records, datasets and on-disk files.

#![allow(missing_docs)]

use std::io::Write;
use tempfile::NamedTempFile;
use whatif_core::{ClimateScores, Dataset, EmployeeRecord};

/// Dataset in the source CSV layout. Two scored units and one without scores.
pub const SAMPLE_CSV: &str = "\
Nombre,Área,Probabilidad_Fuga_Base,Liderazgo,Salario_Beneficios,Formacion
Ana,Ventas,0.80,3.0,3.0,3.0
Eva,Ventas,0.45,3.0,3.0,3.0
Raul,Ventas,0.20,3.0,3.0,3.0
Luis,IT,0.65,4.0,2.5,3.5
Marta,IT,0.35,4.0,2.5,3.5
";

pub fn ventas_scores() -> ClimateScores {
    ClimateScores::new(3.0, 3.0, 3.0)
}

pub fn it_scores() -> ClimateScores {
    ClimateScores::new(4.0, 2.5, 3.5)
}

/// Records matching [`SAMPLE_CSV`] plus one unscored unit
pub fn sample_records() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("Ana", "Ventas", 0.80).with_climate(ventas_scores()),
        EmployeeRecord::new("Eva", "Ventas", 0.45).with_climate(ventas_scores()),
        EmployeeRecord::new("Raul", "Ventas", 0.20).with_climate(ventas_scores()),
        EmployeeRecord::new("Luis", "IT", 0.65).with_climate(it_scores()),
        EmployeeRecord::new("Marta", "IT", 0.35).with_climate(it_scores()),
        EmployeeRecord::new("Sofia", "Legal", 0.50),
    ]
}

pub fn sample_dataset() -> Dataset {
    Dataset::new(sample_records())
}

/// Write `contents` to a temporary file with the given extension
pub fn write_temp(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_csv(contents: &str) -> NamedTempFile {
    write_temp(contents, "csv")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
