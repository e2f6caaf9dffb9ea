//! Integration tests for dataset loading.

use std::fs;

use survey_ingest::{
    IngestError, LoadOptions, load_analysis_options, load_dataset, load_store, load_store_with,
    parse_dataset,
};
use survey_model::{SurveySchema, fields};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "metadata": {
    "source_file": "Boligbehov.xlsx",
    "filepath": "/data/Boligbehov.xlsx",
    "transformed_at": "2025-01-10T12:00:00",
    "sheets_count": 1,
    "transformer_version": "1.0"
  },
  "sheets": [
    {
      "sheet_name": "Sheet1",
      "statistics": {
        "total_rows": 2,
        "total_columns": 4,
        "datetime_fields": 1,
        "numeric_fields": 1,
        "text_fields": 2,
        "multi_select_fields": 0,
        "null_counts": {"kjønn": 0}
      },
      "responses": [
        {
          "response_id": 1,
          "data": {
            "metadata": {"id": 1, "starttidspunkt": "2024-11-01 10:00:00"},
            "demografi": {"hva_er_din_alder": "20-29 år", "kjønn": "Kvinne"}
          }
        },
        {
          "response_id": 2,
          "data": {
            "metadata": {"id": 2, "starttidspunkt": "2024-11-01 11:00:00"},
            "demografi": {"hva_er_din_alder": null, "kjønn": "Mann"},
            "diverse": null
          }
        }
      ]
    }
  ]
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_first_sheet_responses() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "survey.json", DOCUMENT);

    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.sheet_name.as_deref(), Some("Sheet1"));
    assert_eq!(dataset.metadata.source_file, "Boligbehov.xlsx");
    assert_eq!(dataset.statistics.as_ref().unwrap().total_rows, 2);
    assert_eq!(dataset.responses[0].value(fields::AGE), Some("20-29 år"));
    assert_eq!(dataset.responses[1].value(fields::AGE), None);
    assert_eq!(dataset.responses[1].answer("metadata", "id"), Some("2"));
}

#[test]
fn empty_sheet_list_yields_no_responses() {
    let dataset = parse_dataset(r#"{"metadata": {}, "sheets": []}"#, "inline").unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn malformed_document_is_a_load_error() {
    let error = parse_dataset(r#"{"sheets": {"oops": true}}"#, "inline").unwrap_err();
    assert!(matches!(error, IngestError::Json { .. }));
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let error = load_dataset(&dir.path().join("absent.json")).unwrap_err();
    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn store_is_clean_for_known_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "survey.json", DOCUMENT);

    let store = load_store(&path).unwrap();

    assert_eq!(store.total(), 2);
    assert!(store.schema_report().is_clean());
}

#[test]
fn strict_load_rejects_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let document = DOCUMENT.replace(
        "\"kjønn\": \"Mann\"",
        "\"kjønn\": \"Mann\", \"hobby\": \"Fiske\"",
    );
    let path = write_file(&dir, "survey.json", &document);

    let lenient = load_store(&path).unwrap();
    assert_eq!(
        lenient.schema_report().unknown_fields.get("demografi.hobby"),
        Some(&1)
    );

    let error = load_store_with(&path, SurveySchema::housing_survey(), LoadOptions::strict())
        .unwrap_err();
    assert!(matches!(
        error,
        IngestError::UnknownFields { ref fields } if fields == "demografi.hobby"
    ));
}

#[test]
fn partial_options_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "analysis.toml", "min_text_length = 20\ninsight_limit = 3\n");

    let options = load_analysis_options(&path).unwrap();

    assert_eq!(options.min_text_length, 20);
    assert_eq!(options.insight_limit, 3);
    assert_eq!(options.keyword_limit, 100);
}

#[test]
fn invalid_options_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "analysis.toml", "min_text_length = \"long\"\n");

    let error = load_analysis_options(&path).unwrap_err();
    assert!(matches!(error, IngestError::Options { .. }));
}
