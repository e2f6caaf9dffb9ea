//! Wire shape of the survey JSON document and its conversion into model types.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use survey_model::{Response, SheetStatistics, SurveyMetadata};

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct RawSurveyData {
    #[serde(default)]
    pub metadata: SurveyMetadata,
    #[serde(default)]
    pub sheets: Vec<RawSheet>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSheet {
    #[serde(default)]
    pub sheet_name: Option<String>,
    #[serde(default)]
    pub statistics: Option<SheetStatistics>,
    #[serde(default)]
    pub responses: Vec<RawResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawResponse {
    pub response_id: u64,
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

impl RawResponse {
    /// Normalize answer cells to `Option<String>`.
    ///
    /// Numbers and booleans keep their JSON text. A `null` category is
    /// treated as absent.
    pub fn into_response(self) -> Result<Response> {
        let mut response = Response::new(self.response_id);
        for (category, value) in self.data {
            let answers = match value {
                Value::Object(answers) => answers,
                Value::Null => continue,
                other => {
                    return Err(IngestError::InvalidCategory {
                        response_id: self.response_id,
                        category,
                        found: value_kind(&other),
                    });
                }
            };
            for (field, cell) in answers {
                let answer = match cell {
                    Value::Null => None,
                    Value::String(text) => Some(text),
                    Value::Number(number) => Some(number.to_string()),
                    Value::Bool(flag) => Some(flag.to_string()),
                    other => {
                        return Err(IngestError::InvalidAnswer {
                            response_id: self.response_id,
                            category,
                            field,
                            found: value_kind(&other),
                        });
                    }
                };
                response.set_answer(&category, &field, answer);
            }
        }
        Ok(response)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_text() {
        let raw: RawResponse = serde_json::from_str(
            r#"{"response_id": 3, "data": {"metadata": {"id": 42, "navn": null}}}"#,
        )
        .unwrap();
        let response = raw.into_response().unwrap();
        assert_eq!(response.answer("metadata", "id"), Some("42"));
        assert_eq!(response.answer("metadata", "navn"), None);
    }

    #[test]
    fn arrays_are_rejected() {
        let raw: RawResponse = serde_json::from_str(
            r#"{"response_id": 3, "data": {"demografi": {"kjønn": ["Mann"]}}}"#,
        )
        .unwrap();
        let error = raw.into_response().unwrap_err();
        assert!(matches!(
            error,
            IngestError::InvalidAnswer { found: "an array", .. }
        ));
    }
}
