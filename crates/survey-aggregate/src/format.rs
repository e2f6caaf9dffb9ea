//! Chart row construction, ordering and display formatting.

use survey_model::{CategoryCount, ChartOrder, ChartRow, SortMode};

use crate::collate::norwegian_cmp;

/// Precision beyond this is noise for an `f64` percentage.
pub const MAX_PERCENT_DECIMALS: u32 = 15;

/// Percentage of `count` in `total`, rounded to `decimals` places.
///
/// A zero total yields 0 rather than NaN. `decimals` is capped at
/// [`MAX_PERCENT_DECIMALS`].
///
/// ```
/// use survey_aggregate::format::calculate_percentage;
///
/// assert_eq!(calculate_percentage(1, 3, 1), 33.3);
/// assert_eq!(calculate_percentage(5, 0, 1), 0.0);
/// ```
pub fn calculate_percentage(count: u64, total: usize, decimals: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let decimals = decimals.min(MAX_PERCENT_DECIMALS);
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(0));
    (share(count, total) * factor).round() / factor
}

fn share(count: u64, total: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let percent = 100.0 * count as f64 / total as f64;
    percent.clamp(0.0, 100.0)
}

/// One row per counted label, in counting order.
///
/// Percentages are unrounded and relative to `total`, the number of
/// responses the counts were taken over.
pub fn to_chart_rows(counts: &CategoryCount, total: usize) -> Vec<ChartRow> {
    counts
        .iter()
        .map(|(label, count)| {
            let percent = if total == 0 { 0.0 } else { share(count, total) };
            ChartRow::new(label, count, percent)
        })
        .collect()
}

/// Highest count first. Equal counts keep their relative order.
pub fn sort_by_popularity(rows: &mut [ChartRow]) {
    rows.sort_by(|left, right| right.count.cmp(&left.count));
}

pub fn sort_alphabetically(rows: &mut [ChartRow]) {
    rows.sort_by(|left, right| norwegian_cmp(&left.label, &right.label));
}

/// Labels listed in `order` first, by their position there; the rest follow
/// in their current relative order.
pub fn sort_by_custom_order(rows: &mut [ChartRow], order: &[&str]) {
    rows.sort_by_key(|row| {
        order
            .iter()
            .position(|candidate| *candidate == row.label)
            .unwrap_or(usize::MAX)
    });
}

/// Order by the integer that starts each label (`"3 soverom"`, `"2"`).
///
/// `zero_label` sorts as 0. Labels without a leading number go last.
pub fn sort_by_leading_number(rows: &mut [ChartRow], zero_label: Option<&str>) {
    rows.sort_by_key(|row| {
        let number = if zero_label == Some(row.label.as_str()) {
            Some(0)
        } else {
            leading_number(&row.label)
        };
        (number.is_none(), number)
    });
}

fn leading_number(label: &str) -> Option<u64> {
    let trimmed = label.trim_start();
    let end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// The `n` most frequent rows.
pub fn top_n(rows: &[ChartRow], n: usize) -> Vec<ChartRow> {
    let mut sorted = rows.to_vec();
    sort_by_popularity(&mut sorted);
    sorted.truncate(n);
    sorted
}

pub fn apply_order(rows: &mut [ChartRow], order: ChartOrder) {
    match order {
        ChartOrder::Input => {}
        ChartOrder::Popularity => sort_by_popularity(rows),
        ChartOrder::Alphabetical => sort_alphabetically(rows),
        ChartOrder::Custom(reference) => sort_by_custom_order(rows, reference),
        ChartOrder::LeadingNumber { zero_label } => sort_by_leading_number(rows, zero_label),
    }
}

/// Apply a user-selected sort mode; `Natural` falls back to the chart's own
/// order.
pub fn apply_sort_mode(rows: &mut [ChartRow], mode: SortMode, natural: ChartOrder) {
    match mode {
        SortMode::Natural => apply_order(rows, natural),
        SortMode::Popularity => sort_by_popularity(rows),
        SortMode::Alphabetical => sort_alphabetically(rows),
    }
}

/// ```
/// use survey_aggregate::format::format_percentage;
///
/// assert_eq!(format_percentage(12.5, 1), "12.5%");
/// assert_eq!(format_percentage(100.0, 0), "100%");
/// ```
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_PERCENT_DECIMALS as usize);
    format!("{value:.decimals$}%")
}

/// Norwegian digit grouping with a space between thousands.
///
/// ```
/// use survey_aggregate::format::format_number;
///
/// assert_eq!(format_number(1234), "1 234");
/// assert_eq!(format_number(987), "987");
/// ```
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}
