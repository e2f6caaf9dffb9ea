//! Free-text analysis of survey answers.
//!
//! Classification is deterministic keyword matching: themes by substring
//! containment, sentiment by comparing positive and negative word counts.

#![deny(unsafe_code)]

pub mod analysis;
pub mod extract;
pub mod keywords;
pub mod sentiment;
pub mod themes;

pub use analysis::{
    FieldCounts, SentimentCounts, TextStatistics, ThemeBucket, ThemeSummary, group_by_theme,
    insight_score, key_insights, page_of, responses_with_theme, search_text, text_statistics,
    theme_summaries,
};
pub use extract::{analyze_text_responses, classify_responses, extract_text_responses};
pub use keywords::{KeywordFrequency, STOPWORDS, extract_keywords};
pub use sentiment::{NEGATIVE_WORDS, POSITIVE_WORDS, classify_sentiment};
pub use themes::{OTHER_THEME, THEMES, Theme, classify_theme, theme};
