use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use survey_model::{AnalysisOptions, Dataset, Response, SurveySchema};

use crate::document::{RawResponse, RawSurveyData};
use crate::error::{IngestError, Result};
use crate::validation::{SchemaReport, check_against_schema};

const DATA_ENV_VAR: &str = "SURVEY_DATA_PATH";
const DEFAULT_DATA_FILE: &str = "data/survey-data.json";

/// Dataset location: `SURVEY_DATA_PATH` when set, otherwise the bundled file
/// under the workspace root.
pub fn default_data_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(DEFAULT_DATA_FILE)
}

/// Options controlling how strictly the document is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on fields the schema does not know instead of warning.
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// The loaded dataset together with the schema it was checked against.
#[derive(Debug, Clone)]
pub struct ResponseStore {
    dataset: Dataset,
    schema: SurveySchema,
    report: SchemaReport,
}

impl ResponseStore {
    pub fn new(dataset: Dataset, schema: SurveySchema) -> Self {
        let report = check_against_schema(&dataset.responses, &schema);
        Self {
            dataset,
            schema,
            report,
        }
    }

    pub fn responses(&self) -> &[Response] {
        &self.dataset.responses
    }

    pub fn total(&self) -> usize {
        self.dataset.responses.len()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn schema(&self) -> &SurveySchema {
        &self.schema
    }

    pub fn schema_report(&self) -> &SchemaReport {
        &self.report
    }
}

/// Load the dataset and check it against the housing survey schema.
pub fn load_store(path: &Path) -> Result<ResponseStore> {
    load_store_with(path, SurveySchema::housing_survey(), LoadOptions::default())
}

pub fn load_store_with(
    path: &Path,
    schema: SurveySchema,
    options: LoadOptions,
) -> Result<ResponseStore> {
    let dataset = load_dataset(path)?;
    let store = ResponseStore::new(dataset, schema);
    enforce_schema(store.schema_report(), options)?;
    Ok(store)
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let dataset = parse_dataset(&text, &path.display().to_string())?;
    info!(
        path = %path.display(),
        responses = dataset.responses.len(),
        "loaded survey dataset"
    );
    Ok(dataset)
}

/// Parse a survey document. Only the first sheet is used.
pub fn parse_dataset(json: &str, origin: &str) -> Result<Dataset> {
    let raw: RawSurveyData = serde_json::from_str(json).map_err(|source| IngestError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let sheet_count = raw.sheets.len();
    let Some(sheet) = raw.sheets.into_iter().next() else {
        warn!(origin, "survey document has no sheets");
        return Ok(Dataset {
            metadata: raw.metadata,
            ..Dataset::default()
        });
    };
    if sheet_count > 1 {
        debug!(origin, sheet_count, "ignoring sheets after the first");
    }
    let responses = sheet
        .responses
        .into_iter()
        .map(RawResponse::into_response)
        .collect::<Result<Vec<_>>>()?;
    Ok(Dataset {
        metadata: raw.metadata,
        sheet_name: sheet.sheet_name,
        statistics: sheet.statistics,
        responses,
    })
}

fn enforce_schema(report: &SchemaReport, options: LoadOptions) -> Result<()> {
    for (field, count) in &report.packed_scalars {
        warn!(field = %field, count, "single-choice field contains packed answers");
    }
    if report.unknown_fields.is_empty() {
        return Ok(());
    }
    if options.strict {
        let fields = report
            .unknown_fields
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        return Err(IngestError::UnknownFields { fields });
    }
    for (field, count) in &report.unknown_fields {
        warn!(field = %field, count, "field not in schema; it will not be charted");
    }
    Ok(())
}

/// Read analysis options from a TOML file. Missing keys keep their defaults.
pub fn load_analysis_options(path: &Path) -> Result<AnalysisOptions> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    toml::from_str(&text).map_err(|source| IngestError::Options {
        path: path.to_path_buf(),
        source,
    })
}
