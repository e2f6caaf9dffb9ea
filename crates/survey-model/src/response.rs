use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::FieldRef;

/// Answers of one category, keyed by question.
pub type CategoryAnswers = BTreeMap<String, Option<String>>;

/// One submitted questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub response_id: u64,
    #[serde(rename = "data")]
    pub categories: BTreeMap<String, CategoryAnswers>,
}

impl Response {
    pub fn new(response_id: u64) -> Self {
        Self {
            response_id,
            categories: BTreeMap::new(),
        }
    }

    /// Builder used by loaders and tests.
    #[must_use]
    pub fn with_answer(mut self, field: FieldRef, value: Option<&str>) -> Self {
        self.set_answer(field.category, field.key, value.map(str::to_string));
        self
    }

    pub fn set_answer(&mut self, category: &str, key: &str, value: Option<String>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Raw stored answer. Null, missing and empty values all read as `None`.
    pub fn answer(&self, category: &str, key: &str) -> Option<&str> {
        self.categories
            .get(category)?
            .get(key)?
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    pub fn value(&self, field: FieldRef) -> Option<&str> {
        self.answer(field.category, field.key)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryAnswers> {
        self.categories.get(name)
    }
}

/// Provenance block of the dataset document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyMetadata {
    pub source_file: String,
    pub filepath: String,
    pub transformed_at: String,
    pub sheets_count: u64,
    pub transformer_version: String,
}

/// Column statistics computed by the spreadsheet converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetStatistics {
    pub total_rows: u64,
    pub total_columns: u64,
    pub datetime_fields: u64,
    pub numeric_fields: u64,
    pub text_fields: u64,
    pub multi_select_fields: u64,
    pub null_counts: BTreeMap<String, u64>,
}

/// The loaded dataset: the first sheet's responses plus document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub metadata: SurveyMetadata,
    pub sheet_name: Option<String>,
    pub statistics: Option<SheetStatistics>,
    pub responses: Vec<Response>,
}

impl Dataset {
    pub fn from_responses(responses: Vec<Response>) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
