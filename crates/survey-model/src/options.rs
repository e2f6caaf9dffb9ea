//! Tunable thresholds for the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Options for text extraction, keyword statistics and chart formatting.
///
/// Every field has a default, so a partial TOML file only overrides what it
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Free-text answers must be strictly longer than this many characters.
    pub min_text_length: usize,

    /// Words occurring fewer times are left out of keyword statistics.
    pub keyword_min_frequency: usize,

    /// Shorter words are ignored by keyword statistics.
    pub keyword_min_length: usize,

    /// Maximum number of keywords reported.
    pub keyword_limit: usize,

    /// Number of quotes selected as key insights.
    pub insight_limit: usize,

    /// Decimal places for percentages in terminal tables. Exported chart
    /// sheets always use one decimal.
    pub percent_decimals: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_text_length: 15,
            keyword_min_frequency: 2,
            keyword_min_length: 4,
            keyword_limit: 100,
            insight_limit: 5,
            percent_decimals: 1,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_text_length(mut self, length: usize) -> Self {
        self.min_text_length = length;
        self
    }

    #[must_use]
    pub fn with_keyword_min_frequency(mut self, frequency: usize) -> Self {
        self.keyword_min_frequency = frequency;
        self
    }

    #[must_use]
    pub fn with_insight_limit(mut self, limit: usize) -> Self {
        self.insight_limit = limit;
        self
    }
}
