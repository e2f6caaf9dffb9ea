//! Survey dataset ingestion.
//!
//! Loads the questionnaire export (JSON), normalizes answer cells to text,
//! checks the document against the field schema once, and reads the
//! analysis options file.

#![deny(unsafe_code)]

mod document;
pub mod error;
pub mod loader;
pub mod validation;

pub use error::{IngestError, Result};
pub use loader::{
    LoadOptions, ResponseStore, default_data_path, load_analysis_options, load_dataset,
    load_store, load_store_with, parse_dataset,
};
pub use validation::{SchemaReport, check_against_schema};
