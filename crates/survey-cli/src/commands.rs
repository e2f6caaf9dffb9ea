use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{debug, error, info, info_span, trace};

use survey_aggregate::{
    ChartData, PAGES, Page, PageData, apply_sort_mode, build_chart, build_page, facet_options,
    field_chart_rows, page, top_n,
};
use survey_cli::logging::redact_value;
use survey_cli::session::{Session, resolve_data_path};
use survey_model::{ChartOrder, Facet, FieldKind, SortMode, TextResponse};
use survey_report::{ExportScope, PageExport, export_page, flatten_responses};
use survey_text::{
    OTHER_THEME, THEMES, analyze_text_responses, extract_keywords, group_by_theme, key_insights,
    page_of, responses_with_theme, search_text, text_statistics, theme, theme_summaries,
};

use crate::cli::{ChartArgs, Cli, ExportArgs, InsightArgs, PageArgs, TextArgs, ThemeArgs};
use crate::summary::{
    FacetOptions, print_answers, print_chart, print_insights, print_keywords, print_overview,
    print_page, print_themes,
};

pub fn open_session(cli: &Cli) -> Result<Session> {
    let data = resolve_data_path(cli.data.as_deref());
    Session::load(&data, cli.config.as_deref(), cli.filters.to_filter_state())
}

pub fn run_summary(session: &Session) -> Result<()> {
    let _guard = info_span!("summary").entered();
    let filtered = session.filtered();
    let facets: Vec<FacetOptions> = Facet::ALL
        .into_iter()
        .map(|facet| FacetOptions {
            facet,
            options: facet_options(session.all(), facet),
            selected: session.filters().accepted(facet).len(),
        })
        .collect();
    let texts = analyze_text_responses(filtered.iter().copied(), session.options());
    print_overview(
        session.store(),
        filtered.len(),
        &facets,
        &text_statistics(&texts),
    );
    Ok(())
}

/// Reference order of the dashboard chart showing this field, if any.
fn natural_order(category: &str, key: &str) -> ChartOrder {
    PAGES
        .iter()
        .flat_map(|page| page.charts)
        .find(|chart| chart.field.category == category && chart.field.key == key)
        .map_or(ChartOrder::Input, |chart| chart.order)
}

pub fn run_chart(session: &Session, args: &ChartArgs) -> Result<()> {
    let _guard = info_span!("chart", category = %args.category, field = %args.field).entered();
    let spec = session
        .schema()
        .field(&args.category, &args.field)
        .with_context(|| format!("chart {} {}", args.category, args.field))?;
    let subset = session.filtered();
    let mut rows = field_chart_rows(
        subset.iter().copied(),
        session.schema(),
        &args.category,
        &args.field,
    )
    .with_context(|| format!("aggregate {}", spec.label))?;
    apply_sort_mode(
        &mut rows,
        args.sort.into(),
        natural_order(&args.category, &args.field),
    );
    if let Some(limit) = args.top {
        rows = top_n(&rows, limit);
    }
    let chart = ChartData {
        id: format!("{}.{}", args.category, args.field),
        title: spec.label.clone(),
        rows,
    };
    print_chart(&chart, subset.len(), session.options().percent_decimals);
    Ok(())
}

fn find_page(name: &str) -> Result<&'static Page> {
    page(name).ok_or_else(|| {
        let known: Vec<&str> = PAGES.iter().map(|page| page.slug).collect();
        anyhow!("unknown page {name} (expected one of: {})", known.join(", "))
    })
}

pub fn run_page(session: &Session, args: &PageArgs) -> Result<()> {
    let page = find_page(&args.name)?;
    let _guard = info_span!("page", page = page.name).entered();
    let subset = session.filtered();
    let mode: SortMode = args.sort.into();
    let charts = page
        .charts
        .iter()
        .map(|chart| build_chart(&subset, session.schema(), chart, mode))
        .collect::<survey_model::Result<Vec<_>>>()
        .with_context(|| format!("build page {}", page.name))?;
    let data = PageData {
        name: page.name.to_string(),
        total_responses: subset.len(),
        charts,
    };
    if args.json {
        let json = serde_json::to_string_pretty(&data).context("serialize page")?;
        println!("{json}");
    } else {
        print_page(&data, session.options().percent_decimals);
    }
    Ok(())
}

fn text_responses(session: &Session, field: Option<FieldKind>) -> Vec<TextResponse> {
    let subset = session.filtered();
    let mut texts = analyze_text_responses(subset.iter().copied(), session.options());
    if let Some(field) = field {
        texts.retain(|text| text.field == field);
    }
    debug!(
        responses = subset.len(),
        texts = texts.len(),
        field = field.map_or("all", FieldKind::as_str),
        "classified free text"
    );
    texts
}

pub fn run_themes(session: &Session, args: &ThemeArgs) -> Result<()> {
    let _guard = info_span!("themes").entered();
    let texts = text_responses(session, args.field.map(Into::into));
    if args.lists_answers() {
        return list_answers(&texts, args);
    }
    let buckets = group_by_theme(&texts);
    for bucket in &buckets {
        for response in &bucket.responses {
            trace!(
                theme = bucket.name,
                id = response.id,
                text = redact_value(&response.text),
                "grouped"
            );
        }
    }
    print_themes(&theme_summaries(&buckets));
    Ok(())
}

fn list_answers(texts: &[TextResponse], args: &ThemeArgs) -> Result<()> {
    let selected: Vec<&TextResponse> = match args.theme.as_deref() {
        Some(name) if name == OTHER_THEME || theme(name).is_some() => {
            responses_with_theme(texts, name)
        }
        Some(name) => {
            let known: Vec<&str> = THEMES.iter().map(|entry| entry.name).collect();
            return Err(anyhow!(
                "unknown theme {name} (expected one of: {}, {OTHER_THEME})",
                known.join(", ")
            ));
        }
        None => texts.iter().collect(),
    };
    let matches = search_text(selected, args.search.as_deref().unwrap_or_default());
    let shown = page_of(&matches, args.page, args.per_page.max(1));
    debug!(
        theme = args.theme.as_deref().unwrap_or("all"),
        matches = matches.len(),
        shown = shown.len(),
        page = args.page,
        "listed answers"
    );
    for response in shown {
        trace!(id = response.id, text = redact_value(&response.text), "listed");
    }
    print_answers(shown, matches.len(), args.page);
    Ok(())
}

pub fn run_keywords(session: &Session, args: &TextArgs) -> Result<()> {
    let _guard = info_span!("keywords").entered();
    let texts = text_responses(session, args.field.map(Into::into));
    let keywords = extract_keywords(
        texts.iter().map(|text| text.text.as_str()),
        session.options(),
    );
    print_keywords(&keywords);
    Ok(())
}

pub fn run_insights(session: &Session, args: &InsightArgs) -> Result<()> {
    let _guard = info_span!("insights").entered();
    let texts = text_responses(session, args.field.map(Into::into));
    let limit = args.limit.unwrap_or(session.options().insight_limit);
    let insights = key_insights(&texts, limit);
    for response in &insights {
        trace!(id = response.id, text = redact_value(&response.text), "key insight");
    }
    print_insights(&insights);
    Ok(())
}

/// Files written and pages that failed during an export run.
#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<String>,
}

impl ExportOutcome {
    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Export the selected pages. Write failures are reported per page and do
/// not stop the remaining pages.
pub fn run_export(session: &Session, args: &ExportArgs) -> Result<ExportOutcome> {
    let scope: ExportScope = args.scope.into();
    let pages: Vec<&'static Page> = match &args.page {
        Some(name) => vec![find_page(name)?],
        None => PAGES.iter().collect(),
    };
    let _guard = info_span!(
        "export",
        dir = %args.dir.display(),
        scope = scope.file_label(),
        pages = pages.len()
    )
    .entered();
    let subset = session.filtered();
    let rows = match scope {
        ExportScope::Filtered => flatten_responses(subset.iter().copied()),
        ExportScope::All => flatten_responses(session.all()),
    };
    let date = Local::now().date_naive();
    let mut outcome = ExportOutcome::default();
    for page in pages {
        let data = build_page(&subset, session.schema(), page)
            .with_context(|| format!("build page {}", page.name))?;
        let export = PageExport {
            dir: &args.dir,
            page: &data,
            rows: &rows,
            scope,
            date,
        };
        match export_page(&export) {
            Ok(paths) => outcome.written.extend(paths),
            Err(err) => {
                error!(page = page.name, error = %err, "export failed");
                eprintln!("Eksport feilet for {}: {err}", page.name);
                outcome.failed.push(page.name.to_string());
            }
        }
    }
    info!(
        files = outcome.written.len(),
        failed = outcome.failed.len(),
        "export finished"
    );
    Ok(outcome)
}
