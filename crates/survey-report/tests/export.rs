//! Integration tests for CSV and JSON export.

use std::fs;

use chrono::NaiveDate;
use survey_aggregate::{PAGES, apply_filters, build_page, page};
use survey_model::{ChartRow, Facet, FilterState, Response, SurveySchema, fields};
use survey_report::{
    ExportError, ExportScope, PageExport, chart_export_rows, export_page, flatten_responses,
    write_chart_rows, write_flat_rows,
};
use tempfile::TempDir;

fn responses() -> Vec<Response> {
    vec![
        Response::new(11)
            .with_answer(fields::START_TIME, Some("2024-11-01 10:00:00"))
            .with_answer(fields::AGE, Some("20-29 år"))
            .with_answer(fields::GENDER, Some("Kvinne"))
            .with_answer(fields::DESTINATIONS, Some("Bergset;Otnes")),
        Response::new(12)
            .with_answer(fields::AGE, Some("30-39 år"))
            .with_answer(fields::GENDER, Some("Mann")),
    ]
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[test]
fn chart_sheet_csv() {
    let rows = [ChartRow::new("A", 3, 75.0), ChartRow::new("B", 1, 25.0)];
    let mut out = Vec::new();
    write_chart_rows(&mut out, &chart_export_rows(&rows, 4)).unwrap();
    let csv = String::from_utf8(out).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r"
    Kategori,Antall,Andel %
    A,3,75.0
    B,1,25.0
    ");
}

#[test]
fn flattened_responses_csv() {
    let responses = responses();
    let mut out = Vec::new();
    write_flat_rows(&mut out, &flatten_responses(&responses[..1])).unwrap();
    let csv = String::from_utf8(out).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r"
    Respondent ID,Timestamp,Alder,Kjønn,Husstand,Livssituasjon,Antall barn,Eier/Leier,Boligtype,Fornøydhet,Bostedsadresse,Flytteplaner,Destinasjoner,Kjøpekraft,Leiekraft,Kjenner bostøtte,Kjenner startlån,Område,Sektor
    1,2024-11-01 10:00:00,20-29 år,Kvinne,,,,,,,,,Bergset;Otnes,,,,,,
    ");
}

#[test]
fn exports_page_files() {
    let dir = TempDir::new().unwrap();
    let schema = SurveySchema::housing_survey();
    let responses = responses();
    let filters = FilterState::new().with(Facet::Gender, ["Kvinne"]);
    let subset = apply_filters(&responses, &filters);
    let demografi = page("demografi").unwrap();
    let data = build_page(&subset, &schema, demografi).unwrap();
    let rows = flatten_responses(subset.iter().copied());

    let written = export_page(&PageExport {
        dir: dir.path(),
        page: &data,
        rows: &rows,
        scope: ExportScope::Filtered,
        date: date(),
    })
    .unwrap();

    assert_eq!(written.len(), demografi.charts.len() + 2);
    let data_file = dir.path().join("Rendalen_Demografi_Filtrert_2025-01-15.csv");
    assert_eq!(written[0], data_file);
    assert_eq!(fs::read_to_string(&data_file).unwrap().lines().count(), 2);

    let age = fs::read_to_string(
        dir.path()
            .join("Rendalen_Demografi_Charts_2025-01-15_chart-age.csv"),
    )
    .unwrap();
    assert_eq!(age, "Kategori,Antall,Andel %\n20-29 år,1,100.0\n");

    let json = fs::read_to_string(dir.path().join("Rendalen_Demografi_Charts_2025-01-15.json"))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_responses"], 1);
    assert_eq!(value["charts"][0]["id"], "chart-age");
}

#[test]
fn unwritable_target_is_an_export_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, "not a directory").unwrap();
    let schema = SurveySchema::housing_survey();
    let responses = responses();
    let subset: Vec<&Response> = responses.iter().collect();
    let data = build_page(&subset, &schema, &PAGES[3]).unwrap();

    let error = export_page(&PageExport {
        dir: &blocker,
        page: &data,
        rows: &flatten_responses(subset.iter().copied()),
        scope: ExportScope::All,
        date: date(),
    })
    .unwrap_err();
    assert!(matches!(error, ExportError::Io { .. }));
    assert!(error.to_string().contains("taken"));
}
