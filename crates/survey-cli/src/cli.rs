//! CLI argument definitions for the survey dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use survey_cli::session::filter_state;
use survey_model::{Facet, FieldKind, FilterState, SortMode};
use survey_report::ExportScope;

#[derive(Parser)]
#[command(
    name = "survey-dashboard",
    version,
    about = "Housing needs survey - charts, text analysis and exports",
    long_about = "Aggregate the housing needs survey into chart data.\n\n\
                  Filters (--age, --gender, --location, --household, --economy) \
                  combine with AND across facets and OR within a facet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include free-text answers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Survey dataset (default: $SURVEY_DATA_PATH or data/survey-data.json).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Analysis options file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Demographic filters. Repeat a flag to accept several options.
#[derive(Args, Default)]
pub struct FilterArgs {
    #[arg(long = "age", value_name = "LABEL", global = true)]
    pub age: Vec<String>,

    #[arg(long = "gender", value_name = "LABEL", global = true)]
    pub gender: Vec<String>,

    #[arg(long = "location", value_name = "LABEL", global = true)]
    pub location: Vec<String>,

    #[arg(long = "household", value_name = "LABEL", global = true)]
    pub household: Vec<String>,

    #[arg(long = "economy", value_name = "LABEL", global = true)]
    pub economy: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter_state(&self) -> FilterState {
        filter_state([
            (Facet::Age, self.age.as_slice()),
            (Facet::Gender, self.gender.as_slice()),
            (Facet::Location, self.location.as_slice()),
            (Facet::HouseholdType, self.household.as_slice()),
            (Facet::EconomicCapacity, self.economy.as_slice()),
        ])
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Dataset overview, filter options and text statistics.
    Summary,

    /// Aggregate one questionnaire field.
    Chart(ChartArgs),

    /// Build every chart of a dashboard page.
    Page(PageArgs),

    /// Group free-text answers by theme, or list the answers of one theme.
    Themes(ThemeArgs),

    /// Most frequent words in free-text answers.
    Keywords(TextArgs),

    /// Highest scoring free-text answers.
    Insights(InsightArgs),

    /// Write response and chart sheets for dashboard pages.
    Export(ExportArgs),

    /// List dashboard pages and their charts.
    Pages,
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Questionnaire category, e.g. `demografi`.
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Field key within the category.
    #[arg(value_name = "FIELD")]
    pub field: String,

    #[arg(long = "sort", value_enum, default_value = "natural")]
    pub sort: SortArg,

    /// Keep only the first N rows after sorting.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Parser)]
pub struct PageArgs {
    /// Page name or slug (demografi, bolig, flytting, okonomi).
    #[arg(value_name = "PAGE")]
    pub name: String,

    #[arg(long = "sort", value_enum, default_value = "natural")]
    pub sort: SortArg,

    /// Print the page as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TextArgs {
    /// Only answers to this question.
    #[arg(long = "field", value_enum)]
    pub field: Option<TextFieldArg>,
}

#[derive(Parser)]
pub struct ThemeArgs {
    #[arg(long = "field", value_enum)]
    pub field: Option<TextFieldArg>,

    /// List the answers tagged with this theme, including secondary tags.
    #[arg(long = "theme", value_name = "NAME")]
    pub theme: Option<String>,

    /// List answers containing this text (case-insensitive).
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Page of the answer listing, starting at 1.
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    #[arg(long = "per-page", value_name = "N", default_value_t = 10)]
    pub per_page: usize,
}

impl ThemeArgs {
    /// True when answers should be listed instead of the theme summary.
    pub fn lists_answers(&self) -> bool {
        self.theme.is_some() || self.search.is_some()
    }
}

#[derive(Parser)]
pub struct InsightArgs {
    #[arg(long = "field", value_enum)]
    pub field: Option<TextFieldArg>,

    /// Number of answers to show (default from options).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Which responses go into the data sheet.
    #[arg(long = "scope", value_enum, default_value = "filtered")]
    pub scope: ScopeArg,

    /// Export only this page (default: every page).
    #[arg(long = "page", value_name = "PAGE")]
    pub page: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Natural,
    Popularity,
    Alphabetical,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Natural => SortMode::Natural,
            SortArg::Popularity => SortMode::Popularity,
            SortArg::Alphabetical => SortMode::Alphabetical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TextFieldArg {
    PolicyFeedback,
    PlotReason,
}

impl From<TextFieldArg> for FieldKind {
    fn from(arg: TextFieldArg) -> Self {
        match arg {
            TextFieldArg::PolicyFeedback => FieldKind::PolicyFeedback,
            TextFieldArg::PlotReason => FieldKind::PlotReason,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    Filtered,
    All,
}

impl From<ScopeArg> for ExportScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Filtered => ExportScope::Filtered,
            ScopeArg::All => ExportScope::All,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_flags_build_filter_state() {
        let cli = Cli::parse_from([
            "survey-dashboard",
            "--gender",
            "Kvinne",
            "--age",
            "20-29 år",
            "--age",
            "30-39 år",
            "summary",
        ]);
        let filters = cli.filters.to_filter_state();
        assert_eq!(filters.accepted(Facet::Age).len(), 2);
        assert!(filters.accepted(Facet::Gender).contains("Kvinne"));
        assert!(filters.accepted(Facet::Location).is_empty());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "survey-dashboard",
            "export",
            "out",
            "--scope",
            "all",
            "--economy",
            "Under 1 million",
        ]);
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert!(matches!(ExportScope::from(args.scope), ExportScope::All));
        assert!(cli.filters.to_filter_state().has_active_filters());
    }

    #[test]
    fn theme_listing_flags() {
        let cli = Cli::parse_from([
            "survey-dashboard",
            "themes",
            "--theme",
            "Økonomi",
            "--search",
            "lån",
            "--page",
            "2",
        ]);
        let Command::Themes(args) = cli.command else {
            panic!("expected themes");
        };
        assert_eq!(args.theme.as_deref(), Some("Økonomi"));
        assert_eq!(args.search.as_deref(), Some("lån"));
        assert_eq!((args.page, args.per_page), (2, 10));
        assert!(args.lists_answers());

        let cli = Cli::parse_from(["survey-dashboard", "themes"]);
        let Command::Themes(args) = cli.command else {
            panic!("expected themes");
        };
        assert!(!args.lists_answers());
    }
}
