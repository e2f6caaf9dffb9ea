use serde::{Deserialize, Serialize};

/// One bar or slice of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub count: u64,
    /// Share of the responses in percent, within `0.0..=100.0`.
    pub percent: f64,
}

impl ChartRow {
    pub fn new(label: impl Into<String>, count: u64, percent: f64) -> Self {
        Self {
            label: label.into(),
            count,
            percent,
        }
    }
}

/// Presentation order a user can pick for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// The chart's own reference order (age bands, price brackets, ...).
    #[default]
    Natural,
    Popularity,
    Alphabetical,
}

/// How a chart orders its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartOrder {
    /// Rows in counting order.
    Input,
    Popularity,
    Alphabetical,
    /// Reference order first, unknown labels after in input order.
    Custom(&'static [&'static str]),
    /// By the number that starts the label; `zero_label` sorts as 0.
    LeadingNumber { zero_label: Option<&'static str> },
}
