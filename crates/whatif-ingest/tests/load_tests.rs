use pretty_assertions::assert_eq;
use whatif_ingest::{load_path, IngestError};
use whatif_test_utils::{it_scores, sample_records, write_csv, SAMPLE_CSV};

#[test]
fn test_load_sample_file() {
    let file = write_csv(SAMPLE_CSV);
    let dataset = load_path(file.path()).unwrap();

    let expected: Vec<_> = sample_records()
        .into_iter()
        .filter(|r| r.unit != "Legal")
        .collect();
    assert_eq!(dataset.records(), expected.as_slice());
    assert_eq!(dataset.units(), vec!["IT", "Ventas"]);
    assert_eq!(dataset.unit_baseline("IT"), Some(it_scores()));
}

#[test]
fn test_extra_columns_and_padding_are_ignored() {
    let file = write_csv(
        "Id, Nombre , Área ,Probabilidad_Fuga_Base,Antiguedad\n\
         7, Ana , Ventas , 0.30 ,12\n",
    );
    let dataset = load_path(file.path()).unwrap();
    let record = &dataset.records()[0];
    assert_eq!(record.name, "Ana");
    assert_eq!(record.unit, "Ventas");
    assert_eq!(record.base_probability, 0.30);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    let err = load_path(&path).unwrap_err();
    match err {
        IngestError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_non_numeric_probability_is_rejected() {
    let file = write_csv("Nombre,Área,Probabilidad_Fuga_Base\nAna,Ventas,alta\n");
    assert!(matches!(load_path(file.path()), Err(IngestError::Csv(_))));
}
