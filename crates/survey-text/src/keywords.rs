//! Word frequencies for the word cloud.

use serde::Serialize;

use survey_model::{AnalysisOptions, CategoryCount};

/// Common Norwegian words left out of keyword counts.
pub const STOPWORDS: &[&str] = &[
    "og", "i", "å", "er", "for", "det", "på", "med", "til", "av", "som", "en", "at", "den", "var",
    "har", "ikke", "eller", "mer", "når", "blir", "kan", "ville", "skulle", "hadde", "fra", "også",
    "være", "denne", "men", "om", "enn", "da", "ved", "så", "jeg", "de", "meg", "sin", "sitt",
    "alle", "hvis", "noe", "bare", "dere", "deres", "kunne", "han", "hun", "seg", "oss", "opp",
    "ned", "ut", "inn", "over", "under", "etter", "før", "siden", "skal", "vil", "må", "får", "tar",
    "gir", "går", "kom", "ble", "bli",
];

const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordFrequency {
    pub text: String,
    pub value: u64,
}

/// Most frequent content words across `texts`.
///
/// Words are lowercased and split on whitespace and punctuation. Short words,
/// stopwords and plain numbers are skipped. Words below the minimum frequency
/// are dropped and at most `keyword_limit` remain, most frequent first.
pub fn extract_keywords<I, S>(texts: I, options: &AnalysisOptions) -> Vec<KeywordFrequency>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = CategoryCount::new();
    for text in texts {
        let lowered = text.as_ref().to_lowercase().replace(PUNCTUATION, " ");
        for word in lowered.split_whitespace() {
            if is_keyword(word, options.keyword_min_length) {
                counts.increment(word);
            }
        }
    }
    let min_frequency = u64::try_from(options.keyword_min_frequency).unwrap_or(u64::MAX);
    let mut keywords: Vec<KeywordFrequency> = counts
        .iter()
        .filter(|(_, count)| *count >= min_frequency)
        .map(|(word, count)| KeywordFrequency {
            text: word.to_string(),
            value: count,
        })
        .collect();
    keywords.sort_by(|left, right| right.value.cmp(&left.value));
    keywords.truncate(options.keyword_limit);
    keywords
}

fn is_keyword(word: &str, min_length: usize) -> bool {
    word.chars().count() >= min_length
        && !STOPWORDS.contains(&word)
        && !word.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_content_words() {
        let texts = [
            "Flere boliger! Boliger til unge.",
            "Boliger for eldre, og tomter (billige)",
            "tomter 2024 2024",
        ];
        let keywords = extract_keywords(texts, &AnalysisOptions::default());
        assert_eq!(
            keywords,
            vec![
                KeywordFrequency {
                    text: "boliger".to_string(),
                    value: 3
                },
                KeywordFrequency {
                    text: "tomter".to_string(),
                    value: 2
                },
            ]
        );
    }

    #[test]
    fn stopwords_and_short_words_are_ignored() {
        let texts = ["under over etter siden skal", "under over etter siden skal"];
        assert!(extract_keywords(texts, &AnalysisOptions::default()).is_empty());
    }

    #[test]
    fn limit_and_frequency_apply() {
        let texts = ["alfa beta gamma", "alfa beta", "alfa"];
        let options = AnalysisOptions {
            keyword_min_frequency: 1,
            keyword_limit: 2,
            ..AnalysisOptions::default()
        };
        let words: Vec<String> = extract_keywords(texts, &options)
            .into_iter()
            .map(|keyword| keyword.text)
            .collect();
        assert_eq!(words, vec!["alfa", "beta"]);
    }
}
