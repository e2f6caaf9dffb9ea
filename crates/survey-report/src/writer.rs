//! File output for exports.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use survey_aggregate::PageData;

use crate::chart_rows::{ChartExportRow, chart_export_rows};
use crate::error::{ExportError, Result};
use crate::flatten::{FlatRow, flat_columns};

const FILE_PREFIX: &str = "Rendalen";

/// Which responses a data export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    /// The responses passing the current filters.
    #[default]
    Filtered,
    All,
}

impl ExportScope {
    pub fn file_label(self) -> &'static str {
        match self {
            ExportScope::Filtered => "Filtrert",
            ExportScope::All => "Alle",
        }
    }
}

/// `Rendalen_<page>_<label>_<yyyy-mm-dd>`
pub fn file_stem(page: &str, label: &str, date: NaiveDate) -> String {
    format!("{FILE_PREFIX}_{page}_{label}_{}", date.format("%Y-%m-%d"))
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Write flattened responses with a header row.
pub fn write_flat_rows<W: Write>(writer: W, rows: &[FlatRow]) -> csv::Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(flat_columns())?;
    for row in rows {
        csv.write_record(row.record())?;
    }
    csv.flush()?;
    Ok(())
}

const CHART_COLUMNS: [&str; 3] = ["Kategori", "Antall", "Andel %"];

/// Write one chart sheet. The header is written even for an empty chart.
pub fn write_chart_rows<W: Write>(writer: W, rows: &[ChartExportRow]) -> csv::Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(CHART_COLUMNS)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
    Ok(BufWriter::new(file))
}

pub fn write_flat_csv(path: &Path, rows: &[FlatRow]) -> Result<()> {
    write_flat_rows(create(path)?, rows).map_err(|source| ExportError::csv(path, source))
}

pub fn write_chart_csv(path: &Path, rows: &[ChartExportRow]) -> Result<()> {
    write_chart_rows(create(path)?, rows).map_err(|source| ExportError::csv(path, source))
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| ExportError::io(path, source))
}

/// Everything exported for one dashboard page.
#[derive(Debug, Clone, Copy)]
pub struct PageExport<'a> {
    pub dir: &'a Path,
    /// Charts built from the filtered responses.
    pub page: &'a PageData,
    /// Flattened responses of `scope`.
    pub rows: &'a [FlatRow],
    pub scope: ExportScope,
    pub date: NaiveDate,
}

/// Write the response sheet, one CSV per chart, and the page as JSON.
///
/// Returns the written paths in write order.
pub fn export_page(export: &PageExport<'_>) -> Result<Vec<PathBuf>> {
    if export.page.charts.is_empty() {
        return Err(ExportError::Empty(format!(
            "page {} has no chart data",
            export.page.name
        )));
    }
    fs::create_dir_all(export.dir).map_err(|source| ExportError::io(export.dir, source))?;
    let mut written = Vec::with_capacity(export.page.charts.len() + 2);

    let data_path = export.dir.join(format!(
        "{}.csv",
        file_stem(&export.page.name, export.scope.file_label(), export.date)
    ));
    write_flat_csv(&data_path, export.rows)?;
    written.push(data_path);

    let charts_stem = file_stem(&export.page.name, "Charts", export.date);
    for chart in &export.page.charts {
        let path = export.dir.join(format!("{charts_stem}_{}.csv", chart.id));
        let rows = chart_export_rows(&chart.rows, export.page.total_responses);
        write_chart_csv(&path, &rows)?;
        written.push(path);
    }

    let json_path = export.dir.join(format!("{charts_stem}.json"));
    write_json(&json_path, export.page)?;
    written.push(json_path);

    info!(
        page = %export.page.name,
        scope = export.scope.file_label(),
        responses = export.rows.len(),
        files = written.len(),
        dir = %export.dir.display(),
        "exported page"
    );
    Ok(written)
}
