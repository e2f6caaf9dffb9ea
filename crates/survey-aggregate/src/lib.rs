//! Survey aggregation core.
//!
//! - **choice**: single- and multi-choice counting, schema-driven field aggregation
//! - **format**: chart rows, percentages, orderings and display formatting
//! - **filter**: AND-combined demographic facet filtering
//! - **collate**: Norwegian alphabetical ordering
//! - **catalog**: dashboard pages and their charts

pub mod catalog;
pub mod choice;
pub mod collate;
pub mod filter;
pub mod format;

pub use catalog::{
    ChartData, ChartSpec, PAGES, Page, PageData, build_chart, build_page, find_chart, page,
};
pub use choice::{
    aggregate_field, aggregate_multi_choice, aggregate_single_choice, extract_field_values,
    field_chart_rows,
};
pub use collate::norwegian_cmp;
pub use filter::{apply_filters, facet_options, matches_filters};
pub use format::{
    apply_order, apply_sort_mode, calculate_percentage, format_number, format_percentage,
    sort_alphabetically, sort_by_custom_order, sort_by_leading_number, sort_by_popularity,
    to_chart_rows, top_n,
};
