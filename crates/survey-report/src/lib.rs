//! Export of survey data.
//!
//! Flattens responses into spreadsheet rows, shapes chart rows into
//! `Kategori` / `Antall` / `Andel %` sheets and writes both as CSV, with
//! built pages as JSON.

#![deny(unsafe_code)]

pub mod chart_rows;
pub mod error;
pub mod flatten;
pub mod writer;

pub use chart_rows::{ChartExportRow, chart_export_rows};
pub use error::{ExportError, Result};
pub use flatten::{FIELD_COLUMNS, FlatRow, RESPONDENT_COLUMN, flat_columns, flatten_responses};
pub use writer::{
    ExportScope, PageExport, export_page, file_stem, write_chart_csv, write_chart_rows,
    write_flat_csv, write_flat_rows, write_json,
};
