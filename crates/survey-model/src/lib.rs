pub mod answer;
pub mod chart;
pub mod counts;
pub mod error;
pub mod filter;
pub mod options;
pub mod ordering;
pub mod response;
pub mod schema;
pub mod text;

pub use answer::{
    MULTI_CHOICE_DELIMITER, PLACEHOLDER_TOKENS, is_placeholder, meaningful, split_choices,
};
pub use chart::{ChartOrder, ChartRow, SortMode};
pub use counts::CategoryCount;
pub use error::{Result, SurveyError};
pub use filter::{Facet, FilterState};
pub use options::AnalysisOptions;
pub use response::{CategoryAnswers, Dataset, Response, SheetStatistics, SurveyMetadata};
pub use schema::{FieldRef, FieldSpec, SurveySchema, ValueKind, fields, is_multi_select_field_name};
pub use text::{Demographics, FieldKind, NOT_PROVIDED, Sentiment, TextResponse};
