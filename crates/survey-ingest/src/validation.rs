//! One-time schema check of a loaded response set.

use std::collections::BTreeMap;

use survey_model::{MULTI_CHOICE_DELIMITER, Response, SurveySchema, ValueKind, meaningful};

/// Findings from comparing the document with the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub responses: usize,
    /// `category.field` keys present in the document but not in the schema,
    /// with the number of responses carrying them.
    pub unknown_fields: BTreeMap<String, u64>,
    /// Scalar fields whose answers contain the multi-choice delimiter.
    pub packed_scalars: BTreeMap<String, u64>,
    /// Answered cells per known field.
    pub answered: BTreeMap<String, u64>,
}

impl SchemaReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_fields.is_empty() && self.packed_scalars.is_empty()
    }

    /// Answered share of a field in percent.
    pub fn answer_rate(&self, category: &str, key: &str) -> f64 {
        if self.responses == 0 {
            return 0.0;
        }
        let answered = self
            .answered
            .get(&qualified(category, key))
            .copied()
            .unwrap_or(0);
        answered as f64 / self.responses as f64 * 100.0
    }
}

pub fn check_against_schema(responses: &[Response], schema: &SurveySchema) -> SchemaReport {
    let mut report = SchemaReport {
        responses: responses.len(),
        ..SchemaReport::default()
    };
    for response in responses {
        for (category, answers) in &response.categories {
            for (key, value) in answers {
                let name = qualified(category, key);
                let Ok(spec) = schema.field(category, key) else {
                    *report.unknown_fields.entry(name).or_default() += 1;
                    continue;
                };
                let Some(value) = meaningful(value.as_deref()) else {
                    continue;
                };
                *report.answered.entry(name.clone()).or_default() += 1;
                if spec.kind == ValueKind::Scalar && value.contains(MULTI_CHOICE_DELIMITER) {
                    *report.packed_scalars.entry(name).or_default() += 1;
                }
            }
        }
    }
    report
}

fn qualified(category: &str, key: &str) -> String {
    format!("{category}.{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::fields;

    #[test]
    fn reports_unknown_and_packed_fields() {
        let mut odd = Response::new(2).with_answer(fields::GENDER, Some("Mann;Kvinne"));
        odd.set_answer("demografi", "skostørrelse", Some("42".to_string()));
        let responses = vec![
            Response::new(1).with_answer(fields::GENDER, Some("Kvinne")),
            odd,
        ];
        let report = check_against_schema(&responses, &SurveySchema::housing_survey());
        assert_eq!(report.unknown_fields.get("demografi.skostørrelse"), Some(&1));
        assert_eq!(report.packed_scalars.get("demografi.kjønn"), Some(&1));
        assert!((report.answer_rate("demografi", "kjønn") - 100.0).abs() < f64::EPSILON);
        assert!(!report.is_clean());
    }
}
