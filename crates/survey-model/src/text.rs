use serde::{Deserialize, Serialize};

use crate::schema::{FieldRef, fields};

/// Free-text question a [`TextResponse`] was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKind {
    /// Feedback on the municipality's housing policy.
    #[serde(rename = "boligpolitikk")]
    PolicyFeedback,
    /// Why a plot has not been subdivided.
    #[serde(rename = "tomt_årsak")]
    PlotReason,
}

impl FieldKind {
    /// Extraction order per response.
    pub const ALL: [FieldKind; 2] = [FieldKind::PolicyFeedback, FieldKind::PlotReason];

    pub fn field(self) -> FieldRef {
        match self {
            FieldKind::PolicyFeedback => fields::POLICY_FEEDBACK,
            FieldKind::PlotReason => fields::PLOT_REASON,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::PolicyFeedback => "boligpolitikk",
            FieldKind::PlotReason => "tomt_årsak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Sentinel used when a demographic answer is missing.
pub const NOT_PROVIDED: &str = "Ikke oppgitt";

/// Demographics copied from the response at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: String,
    pub gender: String,
    pub location: String,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age: NOT_PROVIDED.to_string(),
            gender: NOT_PROVIDED.to_string(),
            location: NOT_PROVIDED.to_string(),
        }
    }
}

/// A qualifying free-text answer with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub id: u64,
    pub text: String,
    pub field: FieldKind,
    pub demographics: Demographics,
    /// Completion time of the questionnaire, empty when unknown.
    pub timestamp: String,
    /// Matched theme names in theme-list order.
    pub themes: Vec<String>,
    pub sentiment: Sentiment,
}

impl TextResponse {
    /// First matching theme, used for single-bucket grouping.
    pub fn primary_theme(&self) -> Option<&str> {
        self.themes.first().map(String::as_str)
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
