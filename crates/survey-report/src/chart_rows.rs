//! Chart rows in the shape of an exported chart sheet.

use serde::Serialize;

use survey_aggregate::calculate_percentage;
use survey_model::ChartRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartExportRow {
    #[serde(rename = "Kategori")]
    pub category: String,
    #[serde(rename = "Antall")]
    pub count: u64,
    /// Share of `total` with one decimal, `"0.0"` when there are no responses.
    #[serde(rename = "Andel %")]
    pub share: String,
}

pub fn chart_export_rows(rows: &[ChartRow], total: usize) -> Vec<ChartExportRow> {
    rows.iter()
        .map(|row| ChartExportRow {
            category: row.label.clone(),
            count: row.count,
            share: format!("{:.1}", calculate_percentage(row.count, total, 1)),
        })
        .collect()
}
