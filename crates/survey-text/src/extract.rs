//! Projection of free-text answers into classified [`TextResponse`]s.

use tracing::debug;

use survey_model::{
    AnalysisOptions, Demographics, FieldKind, NOT_PROVIDED, Response, TextResponse, fields,
    is_placeholder,
};

use crate::sentiment::classify_sentiment;
use crate::themes::classify_theme;

/// Collect qualifying free-text answers, policy feedback before plot reason
/// within each response.
///
/// An answer qualifies when its trimmed text is not a placeholder and is
/// longer than `options.min_text_length` characters. Themes and sentiment
/// are left empty; see [`classify_responses`].
pub fn extract_text_responses<'a, I>(responses: I, options: &AnalysisOptions) -> Vec<TextResponse>
where
    I: IntoIterator<Item = &'a Response>,
{
    let mut extracted = Vec::new();
    let mut scanned = 0usize;
    for response in responses {
        scanned += 1;
        for kind in FieldKind::ALL {
            let Some(text) = qualifying_text(response, kind, options.min_text_length) else {
                continue;
            };
            extracted.push(TextResponse {
                id: response.response_id,
                text: text.to_string(),
                field: kind,
                demographics: demographics(response),
                timestamp: response
                    .value(fields::COMPLETION_TIME)
                    .unwrap_or_default()
                    .to_string(),
                themes: Vec::new(),
                sentiment: Default::default(),
            });
        }
    }
    debug!(
        responses = scanned,
        texts = extracted.len(),
        "extracted free-text answers"
    );
    extracted
}

fn qualifying_text(response: &Response, kind: FieldKind, min_length: usize) -> Option<&str> {
    let text = response.value(kind.field())?.trim();
    if is_placeholder(text) || text.chars().count() <= min_length {
        return None;
    }
    Some(text)
}

fn demographics(response: &Response) -> Demographics {
    let snapshot = |field| response.value(field).unwrap_or(NOT_PROVIDED).to_string();
    Demographics {
        age: snapshot(fields::AGE),
        gender: snapshot(fields::GENDER),
        location: snapshot(fields::LOCATION),
    }
}

/// Attach themes and sentiment to every response.
pub fn classify_responses(mut responses: Vec<TextResponse>) -> Vec<TextResponse> {
    for response in &mut responses {
        response.themes = classify_theme(&response.text)
            .into_iter()
            .map(|theme| theme.name.to_string())
            .collect();
        response.sentiment = classify_sentiment(&response.text);
    }
    responses
}

/// Extract and classify in one step.
pub fn analyze_text_responses<'a, I>(responses: I, options: &AnalysisOptions) -> Vec<TextResponse>
where
    I: IntoIterator<Item = &'a Response>,
{
    classify_responses(extract_text_responses(responses, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Sentiment;

    #[test]
    fn short_and_placeholder_answers_are_skipped() {
        let responses = vec![
            Response::new(1).with_answer(fields::POLICY_FEEDBACK, Some("Unset")),
            Response::new(2).with_answer(fields::POLICY_FEEDBACK, Some("   kort svar    ")),
            Response::new(3).with_answer(fields::POLICY_FEEDBACK, Some("akkurat femten!")),
            Response::new(4).with_answer(fields::POLICY_FEEDBACK, Some("seksten tegn her")),
        ];
        let texts = extract_text_responses(&responses, &AnalysisOptions::default());
        let ids: Vec<u64> = texts.iter().map(|text| text.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn length_counts_characters() {
        // 15 characters, 18 bytes.
        let responses =
            vec![Response::new(1).with_answer(fields::PLOT_REASON, Some("ååå tomt er dyr"))];
        let texts = extract_text_responses(&responses, &AnalysisOptions::default());
        assert_eq!(texts.len(), 0);
        let responses =
            vec![Response::new(1).with_answer(fields::PLOT_REASON, Some("ååå tomta er dyr"))];
        let texts = extract_text_responses(&responses, &AnalysisOptions::default());
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn both_fields_in_order_with_snapshot() {
        let responses = vec![
            Response::new(9)
                .with_answer(fields::PLOT_REASON, Some("For dyrt å regulere tomta"))
                .with_answer(fields::POLICY_FEEDBACK, Some("  Bygg flere utleieboliger  "))
                .with_answer(fields::AGE, Some("40-49 år"))
                .with_answer(fields::COMPLETION_TIME, Some("2024-11-02 09:15:00")),
        ];
        let texts = analyze_text_responses(&responses, &AnalysisOptions::default());

        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].field, FieldKind::PolicyFeedback);
        assert_eq!(texts[0].text, "Bygg flere utleieboliger");
        assert_eq!(texts[0].demographics.age, "40-49 år");
        assert_eq!(texts[0].demographics.gender, NOT_PROVIDED);
        assert_eq!(texts[0].timestamp, "2024-11-02 09:15:00");
        assert_eq!(texts[0].themes, vec!["Boligtyper"]);
        assert_eq!(texts[1].field, FieldKind::PlotReason);
        assert_eq!(texts[1].themes, vec!["Tomter & Regulering"]);
        assert_eq!(texts[1].sentiment, Sentiment::Negative);
    }
}
