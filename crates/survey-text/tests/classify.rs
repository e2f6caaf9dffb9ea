//! End-to-end text classification over survey responses.

use proptest::prelude::*;
use survey_model::{AnalysisOptions, Response, Sentiment, fields};
use survey_text::{
    OTHER_THEME, THEMES, analyze_text_responses, classify_sentiment, classify_theme,
    group_by_theme, key_insights, text_statistics,
};

fn responses() -> Vec<Response> {
    vec![
        Response::new(1)
            .with_answer(
                fields::POLICY_FEEDBACK,
                Some("Kommunen bør regulere flere tomter, prisene er for høye"),
            )
            .with_answer(fields::GENDER, Some("Kvinne")),
        Response::new(2).with_answer(
            fields::POLICY_FEEDBACK,
            Some("Det er et problem, men tiltaket er bra"),
        ),
        Response::new(3).with_answer(fields::PLOT_REASON, Some(".")),
        Response::new(4).with_answer(fields::PLOT_REASON, None),
    ]
}

#[test]
fn problem_and_bra_is_neutral() {
    assert_eq!(
        classify_sentiment("Det er et problem, men tiltaket er bra"),
        Sentiment::Neutral
    );
}

#[test]
fn multi_theme_text_lands_in_first_bucket_only() {
    let texts = analyze_text_responses(&responses(), &AnalysisOptions::default());
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].themes, vec!["Tomter & Regulering", "Økonomi"]);

    let buckets = group_by_theme(&texts);
    let ids = |name: &str| -> Vec<u64> {
        buckets
            .iter()
            .find(|bucket| bucket.name == name)
            .map(|bucket| bucket.responses.iter().map(|response| response.id).collect())
            .unwrap_or_default()
    };
    assert_eq!(ids("Tomter & Regulering"), vec![1]);
    assert!(ids("Økonomi").is_empty());
    assert_eq!(ids(OTHER_THEME), vec![2]);
}

#[test]
fn statistics_and_insights_over_classified_texts() {
    let texts = analyze_text_responses(&responses(), &AnalysisOptions::default());
    let stats = text_statistics(&texts);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.fields.policy_feedback, 2);
    assert_eq!(stats.sentiment.neutral, 2);

    let top = key_insights(&texts, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, 1);
}

proptest! {
    #[test]
    fn themes_follow_list_order(text in "[a-zæøå ]{0,60}") {
        let themes = classify_theme(&text);
        let positions: Vec<usize> = themes
            .iter()
            .filter_map(|theme| THEMES.iter().position(|candidate| candidate.name == theme.name))
            .collect();
        prop_assert_eq!(positions.len(), themes.len());
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_response_lands_in_exactly_one_bucket(
        bodies in proptest::collection::vec("[a-zæøå ]{16,80}", 0..20)
    ) {
        let raw: Vec<Response> = bodies
            .iter()
            .zip(1..)
            .map(|(body, id)| {
                Response::new(id).with_answer(fields::POLICY_FEEDBACK, Some(body.as_str()))
            })
            .collect();
        let texts = analyze_text_responses(&raw, &AnalysisOptions::default());
        let grouped: usize = group_by_theme(&texts)
            .iter()
            .map(|bucket| bucket.responses.len())
            .sum();
        prop_assert_eq!(grouped, texts.len());
    }
}
