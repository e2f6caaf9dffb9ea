//! Counting of single-choice and packed multi-choice answers.

use tracing::debug;

use survey_model::{
    CategoryCount, ChartRow, Response, Result, SurveyError, SurveySchema, ValueKind, meaningful,
    split_choices,
};

use crate::format::to_chart_rows;

/// Count one option per answered response.
///
/// Nulls and placeholder tokens are skipped; surviving values are trimmed
/// and never split.
pub fn aggregate_single_choice<I, S>(values: I) -> CategoryCount
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut counts = CategoryCount::new();
    for value in values {
        if let Some(answer) = meaningful(value.as_ref().map(AsRef::as_ref)) {
            counts.increment(answer);
        }
    }
    counts
}

/// Count every selected option of packed multi-choice answers on its own.
///
/// `"A;B"` adds one to `A` and one to `B`; the combination is never a key.
/// The total of the result may exceed the number of responses.
pub fn aggregate_multi_choice<I, S>(values: I) -> CategoryCount
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut counts = CategoryCount::new();
    for value in values {
        let Some(raw) = meaningful(value.as_ref().map(AsRef::as_ref)) else {
            continue;
        };
        for option in split_choices(raw) {
            counts.increment(option);
        }
    }
    counts
}

/// One raw answer per response for the given field.
///
/// Fails with [`SurveyError::UnknownCategory`] or
/// [`SurveyError::UnknownField`] when the schema does not define the pair,
/// so a typo never reads as "nobody answered".
pub fn extract_field_values<'a, I>(
    responses: I,
    schema: &SurveySchema,
    category: &str,
    key: &str,
) -> Result<Vec<Option<&'a str>>>
where
    I: IntoIterator<Item = &'a Response>,
{
    schema.field(category, key)?;
    Ok(responses
        .into_iter()
        .map(|response| response.answer(category, key))
        .collect())
}

/// Aggregate a field with the counting rule its schema kind calls for.
pub fn aggregate_field<'a, I>(
    responses: I,
    schema: &SurveySchema,
    category: &str,
    key: &str,
) -> Result<CategoryCount>
where
    I: IntoIterator<Item = &'a Response>,
{
    let (counts, _) = count_field(responses, schema, category, key)?;
    Ok(counts)
}

/// Aggregate a field and format it as chart rows over the given responses.
pub fn field_chart_rows<'a, I>(
    responses: I,
    schema: &SurveySchema,
    category: &str,
    key: &str,
) -> Result<Vec<ChartRow>>
where
    I: IntoIterator<Item = &'a Response>,
{
    let (counts, total) = count_field(responses, schema, category, key)?;
    Ok(to_chart_rows(&counts, total))
}

fn count_field<'a, I>(
    responses: I,
    schema: &SurveySchema,
    category: &str,
    key: &str,
) -> Result<(CategoryCount, usize)>
where
    I: IntoIterator<Item = &'a Response>,
{
    let spec = schema.field(category, key)?;
    if !spec.kind.is_aggregatable() {
        return Err(SurveyError::NotAggregatable {
            category: category.to_string(),
            field: key.to_string(),
        });
    }
    let values = extract_field_values(responses, schema, category, key)?;
    let counts = match spec.kind {
        ValueKind::MultiChoice => aggregate_multi_choice(values.iter().copied()),
        _ => aggregate_single_choice(values.iter().copied()),
    };
    debug!(
        field = %spec.label,
        kind = ?spec.kind,
        responses = values.len(),
        options = counts.len(),
        "aggregated field"
    );
    Ok((counts, values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_choice_trims_but_does_not_split() {
        let counts = aggregate_single_choice([Some(" Mann "), Some("Mann"), Some("A;B")]);
        assert_eq!(counts.get("Mann"), Some(2));
        assert_eq!(counts.get("A;B"), Some(1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn multi_choice_counts_parts_independently() {
        let counts = aggregate_multi_choice([Some("Skole;Butikk"), Some("Skole;."), Some("Unset")]);
        assert_eq!(counts.get("Skole"), Some(2));
        assert_eq!(counts.get("Butikk"), Some(1));
        assert_eq!(counts.total(), 3);
        assert!(!counts.contains("Skole;Butikk"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(aggregate_single_choice(Vec::<Option<&str>>::new()).is_empty());
        assert!(aggregate_multi_choice(Vec::<Option<String>>::new()).is_empty());
    }
}
