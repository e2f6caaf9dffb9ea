use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_aggregate::{ChartData, PAGES, PageData, format_number, format_percentage};
use survey_ingest::ResponseStore;
use survey_model::{Facet, Sentiment, TextResponse};
use survey_text::{KeywordFrequency, TextStatistics, ThemeSummary, insight_score};

/// Options shown per facet in the overview.
pub struct FacetOptions {
    pub facet: Facet,
    pub options: Vec<String>,
    pub selected: usize,
}

pub fn print_overview(
    store: &ResponseStore,
    filtered: usize,
    facets: &[FacetOptions],
    stats: &TextStatistics,
) {
    let metadata = &store.dataset().metadata;
    if !metadata.source_file.is_empty() {
        println!("Source: {}", metadata.source_file);
    }
    if let Some(sheet) = &store.dataset().sheet_name {
        println!("Sheet: {sheet}");
    }
    println!(
        "Responses: {} ({} after filters)",
        format_number(store.total() as u64),
        format_number(filtered as u64)
    );
    let report = store.schema_report();
    if !report.is_clean() {
        println!(
            "Schema: {} unknown field(s), {} scalar field(s) holding several options",
            report.unknown_fields.len(),
            report.packed_scalars.len()
        );
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Options"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in facets {
        let selected = if entry.selected == 0 {
            dim_cell("-")
        } else {
            Cell::new(entry.selected)
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(entry.facet.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.options.join(", ")),
            selected,
        ]);
    }
    println!("{table}");
    print_text_statistics(stats);
}

fn print_text_statistics(stats: &TextStatistics) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Free text"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows: [(&str, usize); 9] = [
        ("Answers", stats.total),
        ("Housing policy", stats.fields.policy_feedback),
        ("Plot reason", stats.fields.plot_reason),
        ("Average length", stats.average_length),
        ("Shortest", stats.min_length),
        ("Longest", stats.max_length),
        ("Positive", stats.sentiment.positive),
        ("Negative", stats.sentiment.negative),
        ("Neutral", stats.sentiment.neutral),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");
}

/// One chart as a label / count / share table.
pub fn chart_table(chart: &ChartData, decimals: u32) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&chart.title),
        header_cell("Antall"),
        header_cell("Andel"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    if chart.rows.is_empty() {
        table.add_row(vec![dim_cell("Ingen svar"), dim_cell("-"), dim_cell("-")]);
    }
    for row in &chart.rows {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(format_number(row.count)),
            Cell::new(format_percentage(row.percent, decimals as usize)),
        ]);
    }
    table
}

pub fn print_chart(chart: &ChartData, total: usize, decimals: u32) {
    println!("{} ({} svar)", chart.id, format_number(total as u64));
    println!("{}", chart_table(chart, decimals));
}

pub fn print_page(page: &PageData, decimals: u32) {
    println!(
        "{}: {} responses",
        page.name,
        format_number(page.total_responses as u64)
    );
    for chart in &page.charts {
        println!();
        println!("{}", chart_table(chart, decimals));
    }
}

pub fn print_pages() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Page"),
        header_cell("Chart"),
        header_cell("Title"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    for page in PAGES {
        for (index, chart) in page.charts.iter().enumerate() {
            let page_cell = if index == 0 {
                Cell::new(format!("{} ({})", page.name, page.slug))
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                page_cell,
                Cell::new(chart.id),
                Cell::new(chart.title),
                dim_cell(format!("{} {}", chart.field.category, chart.field.key)),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_themes(summaries: &[ThemeSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Theme"),
        header_cell("Answers"),
        header_cell("Positive"),
        header_cell("Negative"),
        header_cell("Neutral"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.name).add_attribute(Attribute::Bold),
            Cell::new(summary.count),
            count_cell(summary.sentiment.get(Sentiment::Positive), Color::Green),
            count_cell(summary.sentiment.get(Sentiment::Negative), Color::Red),
            count_cell(summary.sentiment.get(Sentiment::Neutral), Color::Reset),
        ]);
    }
    println!("{table}");
}

pub fn print_keywords(keywords: &[KeywordFrequency]) {
    if keywords.is_empty() {
        println!("No recurring words.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Word"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for keyword in keywords {
        table.add_row(vec![Cell::new(&keyword.text), Cell::new(keyword.value)]);
    }
    println!("{table}");
}

pub fn print_insights(insights: &[&TextResponse]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Score"),
        header_cell("Sentiment"),
        header_cell("Themes"),
        header_cell("Answer"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for response in insights {
        table.add_row(vec![
            dim_cell(response.id),
            Cell::new(insight_score(response)),
            sentiment_cell(response.sentiment),
            themes_cell(response),
            Cell::new(&response.text),
        ]);
    }
    println!("{table}");
}

/// One page of listed answers with the total number of matches.
pub fn print_answers(answers: &[&TextResponse], matches: usize, page: usize) {
    println!("{} answer(s), page {page}", format_number(matches as u64));
    if answers.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Sentiment"),
        header_cell("Themes"),
        header_cell("Answer"),
    ]);
    apply_table_style(&mut table);
    for response in answers {
        table.add_row(vec![
            dim_cell(response.id),
            sentiment_cell(response.sentiment),
            themes_cell(response),
            Cell::new(&response.text),
        ]);
    }
    println!("{table}");
}

fn themes_cell(response: &TextResponse) -> Cell {
    if response.themes.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(response.themes.join(", "))
    }
}

fn sentiment_cell(sentiment: Sentiment) -> Cell {
    match sentiment {
        Sentiment::Positive => Cell::new("positive").fg(Color::Green),
        Sentiment::Negative => Cell::new("negative").fg(Color::Red),
        Sentiment::Neutral => dim_cell("neutral"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use survey_model::ChartRow;

    use super::*;

    #[test]
    fn chart_table_uses_requested_decimals() {
        let chart = ChartData {
            id: "demografi.alder".to_string(),
            title: "Alder".to_string(),
            rows: vec![ChartRow::new("20-29 år", 1, 100.0 / 3.0)],
        };
        let rendered = chart_table(&chart, 2).to_string();
        assert!(rendered.contains("33.33%"), "{rendered}");
        assert!(chart_table(&chart, 0).to_string().contains("33%"));
    }
}
