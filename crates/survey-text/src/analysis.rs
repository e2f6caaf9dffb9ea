//! Theme grouping, statistics and key-insight selection over classified
//! responses.

use serde::Serialize;

use survey_model::{FieldKind, Sentiment, TextResponse};

use crate::themes::{OTHER_THEME, THEMES};

/// Responses whose primary theme is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeBucket<'a> {
    pub name: &'static str,
    pub responses: Vec<&'a TextResponse>,
}

/// One bucket per theme in list order, then [`OTHER_THEME`].
///
/// Every bucket is present even when empty. A response lands only in the
/// bucket of its first theme, or in `Other` when it has none.
pub fn group_by_theme(responses: &[TextResponse]) -> Vec<ThemeBucket<'_>> {
    let mut buckets: Vec<ThemeBucket<'_>> = THEMES
        .iter()
        .map(|theme| theme.name)
        .chain([OTHER_THEME])
        .map(|name| ThemeBucket {
            name,
            responses: Vec::new(),
        })
        .collect();
    let other = buckets.len() - 1;
    for response in responses {
        let position = response
            .primary_theme()
            .and_then(|primary| buckets.iter().position(|bucket| bucket.name == primary))
            .unwrap_or(other);
        buckets[position].responses.push(response);
    }
    buckets
}

/// Responses tagged with theme `name` anywhere in their theme list.
///
/// Unlike [`group_by_theme`] a response with several themes is listed under
/// each of them. [`OTHER_THEME`] selects the responses without any theme.
pub fn responses_with_theme<'a>(
    responses: &'a [TextResponse],
    name: &str,
) -> Vec<&'a TextResponse> {
    responses
        .iter()
        .filter(|response| {
            if name == OTHER_THEME {
                response.themes.is_empty()
            } else {
                response.themes.iter().any(|theme| theme == name)
            }
        })
        .collect()
}

/// Responses whose text contains `term`, ignoring case. A blank term keeps
/// every response.
pub fn search_text<'a, I>(responses: I, term: &str) -> Vec<&'a TextResponse>
where
    I: IntoIterator<Item = &'a TextResponse>,
{
    let needle = term.trim().to_lowercase();
    responses
        .into_iter()
        .filter(|response| {
            needle.is_empty() || response.text.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The 1-based `page` of `items` with `per_page` entries each. Pages past the
/// end are empty.
pub fn page_of<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn tally<'a, I>(responses: I) -> Self
    where
        I: IntoIterator<Item = &'a TextResponse>,
    {
        let mut counts = Self::default();
        for response in responses {
            match response.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Neutral => counts.neutral += 1,
            }
        }
        counts
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldCounts {
    pub policy_feedback: usize,
    pub plot_reason: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStatistics {
    pub total: usize,
    /// Rounded mean length in characters.
    pub average_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub sentiment: SentimentCounts,
    pub fields: FieldCounts,
}

/// Summary figures for the text overview. All zero for no responses.
pub fn text_statistics(responses: &[TextResponse]) -> TextStatistics {
    if responses.is_empty() {
        return TextStatistics::default();
    }
    let lengths: Vec<usize> = responses.iter().map(TextResponse::len).collect();
    let total = responses.len();
    let sum: usize = lengths.iter().sum();
    let mut fields = FieldCounts::default();
    for response in responses {
        match response.field {
            FieldKind::PolicyFeedback => fields.policy_feedback += 1,
            FieldKind::PlotReason => fields.plot_reason += 1,
        }
    }
    TextStatistics {
        total,
        average_length: (sum + total / 2) / total,
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        sentiment: SentimentCounts::tally(responses),
        fields,
    }
}

/// Ranking score for key insights.
///
/// Positive answers score 3 and negative 2. Lengths of 50 to 300 characters
/// add 2, longer answers add 1. Each matched theme adds 1.
pub fn insight_score(response: &TextResponse) -> usize {
    let sentiment = match response.sentiment {
        Sentiment::Positive => 3,
        Sentiment::Negative => 2,
        Sentiment::Neutral => 0,
    };
    let length = match response.len() {
        50..=300 => 2,
        301.. => 1,
        _ => 0,
    };
    sentiment + length + response.themes.len()
}

/// The `limit` highest-scoring responses; equal scores keep input order.
pub fn key_insights(responses: &[TextResponse], limit: usize) -> Vec<&TextResponse> {
    let mut ranked: Vec<&TextResponse> = responses.iter().collect();
    ranked.sort_by_key(|response| std::cmp::Reverse(insight_score(response)));
    ranked.truncate(limit);
    ranked
}

/// Figures shown on a theme card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSummary {
    pub name: String,
    pub count: usize,
    pub sentiment: SentimentCounts,
}

pub fn theme_summaries(buckets: &[ThemeBucket<'_>]) -> Vec<ThemeSummary> {
    buckets
        .iter()
        .map(|bucket| ThemeSummary {
            name: bucket.name.to_string(),
            count: bucket.responses.len(),
            sentiment: SentimentCounts::tally(bucket.responses.iter().copied()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Demographics;

    fn text(id: u64, body: &str, themes: &[&str], sentiment: Sentiment) -> TextResponse {
        TextResponse {
            id,
            text: body.to_string(),
            field: FieldKind::PolicyFeedback,
            demographics: Demographics::default(),
            timestamp: String::new(),
            themes: themes.iter().map(|theme| (*theme).to_string()).collect(),
            sentiment,
        }
    }

    #[test]
    fn theme_selection_uses_every_tag() {
        let responses = vec![
            text(1, "tomt", &["Tomter & Regulering", "Økonomi"], Sentiment::Neutral),
            text(2, "lån", &["Økonomi"], Sentiment::Neutral),
            text(3, "ingenting", &[], Sentiment::Neutral),
        ];

        fn ids(selected: Vec<&TextResponse>) -> Vec<u64> {
            selected.iter().map(|response| response.id).collect()
        }
        assert_eq!(ids(responses_with_theme(&responses, "Økonomi")), vec![1, 2]);
        assert_eq!(ids(responses_with_theme(&responses, "Tomter & Regulering")), vec![1]);
        assert_eq!(ids(responses_with_theme(&responses, OTHER_THEME)), vec![3]);

        let buckets = group_by_theme(&responses);
        let economy = buckets.iter().find(|bucket| bucket.name == "Økonomi").unwrap();
        assert_eq!(ids(economy.responses.clone()), vec![2]);
        let plots = buckets
            .iter()
            .find(|bucket| bucket.name == "Tomter & Regulering")
            .unwrap();
        assert_eq!(ids(plots.responses.clone()), vec![1]);
    }

    #[test]
    fn search_ignores_case() {
        let responses = vec![
            text(1, "For få Utleieboliger", &[], Sentiment::Neutral),
            text(2, "Dyre tomter", &[], Sentiment::Neutral),
        ];
        let found: Vec<u64> = search_text(&responses, " utleie ")
            .iter()
            .map(|response| response.id)
            .collect();
        assert_eq!(found, vec![1]);
        assert_eq!(search_text(&responses, "").len(), 2);
        assert!(search_text(&responses, "ØKONOMI").is_empty());
    }

    #[test]
    fn pages_are_one_based() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_of(&items, 1, 2), &[1, 2]);
        assert_eq!(page_of(&items, 3, 2), &[5]);
        assert!(page_of(&items, 4, 2).is_empty());
        assert_eq!(page_of(&items, 0, 2), &[1, 2]);
    }

    #[test]
    fn first_theme_wins() {
        let responses = vec![
            text(1, "tomt", &["Tomter & Regulering", "Økonomi"], Sentiment::Neutral),
            text(2, "ingenting", &[], Sentiment::Neutral),
        ];
        let buckets = group_by_theme(&responses);

        assert_eq!(buckets.len(), THEMES.len() + 1);
        let count = |name: &str| {
            buckets
                .iter()
                .find(|bucket| bucket.name == name)
                .map_or(0, |bucket| bucket.responses.len())
        };
        assert_eq!(count("Tomter & Regulering"), 1);
        assert_eq!(count("Økonomi"), 0);
        assert_eq!(count(OTHER_THEME), 1);
        assert_eq!(buckets.last().map(|bucket| bucket.name), Some(OTHER_THEME));
    }

    #[test]
    fn statistics_of_nothing_are_zero() {
        assert_eq!(text_statistics(&[]), TextStatistics::default());
    }

    #[test]
    fn statistics_round_average() {
        let responses = vec![
            text(1, "abcd", &[], Sentiment::Positive),
            text(2, "abcdefg", &[], Sentiment::Neutral),
        ];
        let stats = text_statistics(&responses);
        assert_eq!(stats.average_length, 6);
        assert_eq!(stats.min_length, 4);
        assert_eq!(stats.max_length, 7);
        assert_eq!(stats.sentiment.positive, 1);
        assert_eq!(stats.fields.policy_feedback, 2);
    }

    #[test]
    fn insights_prefer_positive_substantial_answers() {
        let medium = "x".repeat(60);
        let long = "y".repeat(400);
        let responses = vec![
            text(1, "kort", &[], Sentiment::Neutral),
            text(2, &long, &["Økonomi"], Sentiment::Negative),
            text(3, &medium, &["Boligtyper"], Sentiment::Positive),
            text(4, &medium, &[], Sentiment::Negative),
        ];
        assert_eq!(insight_score(&responses[2]), 6);
        assert_eq!(insight_score(&responses[1]), 4);

        let ids: Vec<u64> = key_insights(&responses, 3).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
    }

    #[test]
    fn summaries_follow_buckets() {
        let responses = vec![
            text(1, "a", &["Økonomi"], Sentiment::Negative),
            text(2, "b", &["Økonomi"], Sentiment::Positive),
        ];
        let summaries = theme_summaries(&group_by_theme(&responses));
        let economy = summaries.iter().find(|summary| summary.name == "Økonomi").unwrap();
        assert_eq!(economy.count, 2);
        assert_eq!(economy.sentiment.negative, 1);
        assert_eq!(economy.sentiment.get(Sentiment::Positive), 1);
    }
}
