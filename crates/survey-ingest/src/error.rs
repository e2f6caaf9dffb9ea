use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse survey document {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse options file {path}: {source}")]
    Options {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("response {response_id}: category {category} is {found}, expected an object")]
    InvalidCategory {
        response_id: u64,
        category: String,
        found: &'static str,
    },

    #[error("response {response_id}: {category}.{field} holds {found}, expected text or null")]
    InvalidAnswer {
        response_id: u64,
        category: String,
        field: String,
        found: &'static str,
    },

    #[error("document contains fields missing from the schema: {fields}")]
    UnknownFields { fields: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
