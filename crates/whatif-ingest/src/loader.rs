//! CSV loader
//!
//! Uses the `csv` crate with serde to map source rows onto typed records.
//! Climate-score columns are optional as a group: a file may omit all three,
//! but a row that fills only some of them is rejected.

use crate::columns;
use crate::error::IngestError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use whatif_core::{ClimateScores, Dataset, EmployeeRecord};

/// One source row before validation
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Nombre")]
    name: String,
    #[serde(rename = "Área", alias = "Area")]
    unit: String,
    #[serde(rename = "Probabilidad_Fuga_Base")]
    base_probability: f64,
    #[serde(rename = "Liderazgo", default)]
    leadership: Option<f64>,
    #[serde(rename = "Salario_Beneficios", default)]
    compensation: Option<f64>,
    #[serde(rename = "Formacion", default)]
    training: Option<f64>,
}

impl RawRow {
    fn validate(self, row: usize) -> Result<EmployeeRecord, IngestError> {
        if self.name.is_empty() {
            return Err(IngestError::invalid(row, columns::NAME, "empty name"));
        }
        if self.unit.is_empty() {
            return Err(IngestError::invalid(row, columns::UNIT, "empty unit"));
        }
        let p = self.base_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(IngestError::invalid(
                row,
                columns::BASE_PROBABILITY,
                format!("{p} is not a probability in [0, 1]"),
            ));
        }

        let climate = match (self.leadership, self.compensation, self.training) {
            (None, None, None) => None,
            (Some(l), Some(c), Some(t)) => {
                check_score(row, columns::LEADERSHIP, l)?;
                check_score(row, columns::COMPENSATION, c)?;
                check_score(row, columns::TRAINING, t)?;
                Some(ClimateScores::new(l, c, t))
            }
            (l, c, _) => {
                let missing = if l.is_none() {
                    columns::LEADERSHIP
                } else if c.is_none() {
                    columns::COMPENSATION
                } else {
                    columns::TRAINING
                };
                return Err(IngestError::invalid(
                    row,
                    missing,
                    "climate scores must be given all together or not at all",
                ));
            }
        };

        Ok(EmployeeRecord {
            name: self.name,
            unit: self.unit,
            base_probability: p,
            climate,
        })
    }
}

fn check_score(row: usize, column: &'static str, value: f64) -> Result<(), IngestError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IngestError::invalid(row, column, format!("{value} is not a number")))
    }
}

/// Load a dataset from any reader
///
/// # Errors
///
/// Returns [`IngestError`] on malformed CSV, missing required columns,
/// invalid values or an empty file.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        records.push(raw.validate(i + 1)?);
    }

    if records.is_empty() {
        return Err(IngestError::Empty);
    }

    let dataset = Dataset::new(records);
    tracing::info!(
        "Loaded {} employees across {} units",
        dataset.len(),
        dataset.units().len()
    );
    Ok(dataset)
}

/// Load a dataset from a string
///
/// # Errors
///
/// See [`load_reader`].
pub fn load_str(contents: &str) -> Result<Dataset, IngestError> {
    load_reader(contents.as_bytes())
}

/// Load a dataset from a file
///
/// # Errors
///
/// Returns [`IngestError::Io`] when the file cannot be opened, otherwise see
/// [`load_reader`].
pub fn load_path(path: impl AsRef<Path>) -> Result<Dataset, IngestError> {
    let path = path.as_ref();
    tracing::debug!("Reading dataset from {}", path.display());
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Nombre,Área,Probabilidad_Fuga_Base,Liderazgo,Salario_Beneficios,Formacion\n";

    #[test]
    fn parses_full_row() {
        let ds = load_str(&format!("{HEADER}Ana,Ventas,0.8,3.0,2.5,4.0\n")).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.name, "Ana");
        assert_eq!(r.unit, "Ventas");
        assert_eq!(r.base_probability, 0.8);
        assert_eq!(r.climate, Some(ClimateScores::new(3.0, 2.5, 4.0)));
    }

    #[test]
    fn score_columns_are_optional() {
        let ds = load_str("Nombre,Área,Probabilidad_Fuga_Base\nAna,Ventas,0.8\n").unwrap();
        assert_eq!(ds.records()[0].climate, None);
    }

    #[test]
    fn empty_score_cells_mean_no_scores() {
        let ds = load_str(&format!("{HEADER}Ana,Ventas,0.8,,,\n")).unwrap();
        assert_eq!(ds.records()[0].climate, None);
    }

    #[test]
    fn unaccented_unit_header_is_accepted() {
        let ds = load_str("Nombre,Area,Probabilidad_Fuga_Base\nAna,Ventas,0.8\n").unwrap();
        assert_eq!(ds.units(), vec!["Ventas"]);
    }

    #[test]
    fn partial_scores_are_rejected() {
        let err = load_str(&format!("{HEADER}Ana,Ventas,0.8,3.0,,4.0\n")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidValue { row: 1, column: "Salario_Beneficios", .. }
        ));
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        let err = load_str(&format!("{HEADER}Ana,Ventas,0.8,3,3,3\nEva,IT,1.5,3,3,3\n")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidValue { row: 2, column: "Probabilidad_Fuga_Base", .. }
        ));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(load_str(HEADER), Err(IngestError::Empty)));
    }

    #[test]
    fn missing_required_column_is_csv_error() {
        let err = load_str("Nombre,Probabilidad_Fuga_Base\nAna,0.8\n").unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }
}
