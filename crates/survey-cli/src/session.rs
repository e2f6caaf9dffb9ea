//! Loaded dataset, options and the active filters for one CLI run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use survey_aggregate::apply_filters;
use survey_ingest::{ResponseStore, default_data_path, load_analysis_options, load_store};
use survey_model::{AnalysisOptions, Facet, FilterState, Response, SurveySchema};

/// `--data` when given, otherwise `SURVEY_DATA_PATH` or the bundled dataset.
pub fn resolve_data_path(arg: Option<&Path>) -> PathBuf {
    arg.map_or_else(default_data_path, Path::to_path_buf)
}

/// Build a filter state from per-facet label lists.
pub fn filter_state<'a, I>(selections: I) -> FilterState
where
    I: IntoIterator<Item = (Facet, &'a [String])>,
{
    let mut filters = FilterState::new();
    for (facet, labels) in selections {
        for label in labels {
            filters.toggle(facet, label, true);
        }
    }
    filters
}

pub struct Session {
    store: ResponseStore,
    options: AnalysisOptions,
    filters: FilterState,
}

impl Session {
    pub fn load(data: &Path, config: Option<&Path>, filters: FilterState) -> Result<Self> {
        let options = match config {
            Some(path) => load_analysis_options(path)
                .with_context(|| format!("load options {}", path.display()))?,
            None => AnalysisOptions::default(),
        };
        let store = load_store(data).with_context(|| format!("load dataset {}", data.display()))?;
        if filters.has_active_filters() {
            let facets: Vec<&str> = filters.active_facets().map(Facet::label).collect();
            info!(facets = %facets.join(", "), "filters active");
        }
        Ok(Self {
            store,
            options,
            filters,
        })
    }

    pub fn store(&self) -> &ResponseStore {
        &self.store
    }

    pub fn schema(&self) -> &SurveySchema {
        self.store.schema()
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn all(&self) -> &[Response] {
        self.store.responses()
    }

    /// Responses passing the active filters; all of them when none is set.
    pub fn filtered(&self) -> Vec<&Response> {
        apply_filters(self.store.responses(), &self.filters)
    }
}
