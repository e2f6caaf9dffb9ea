use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("unknown survey category: {category}")]
    UnknownCategory { category: String },
    #[error("unknown field {field} in category {category}")]
    UnknownField { category: String, field: String },
    #[error("field {category}.{field} holds free text and cannot be aggregated")]
    NotAggregatable { category: String, field: String },
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
