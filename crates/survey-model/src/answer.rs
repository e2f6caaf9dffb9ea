//! Answer value conventions shared by every consumer of the dataset.
//!
//! The questionnaire export writes unanswered or corrupted cells as sentinel
//! tokens rather than `null`, and packs multi-choice answers into a single
//! string joined by [`MULTI_CHOICE_DELIMITER`].

/// Tokens that stand for "no real answer". Compared after trimming.
pub const PLACEHOLDER_TOKENS: [&str; 3] = ["Unset", ".", ""];

/// Separator between options of a packed multi-choice answer.
pub const MULTI_CHOICE_DELIMITER: char = ';';

/// Returns true when the value carries no answer.
///
/// ```
/// use survey_model::is_placeholder;
///
/// assert!(is_placeholder(" Unset "));
/// assert!(is_placeholder("."));
/// assert!(is_placeholder("   "));
/// assert!(!is_placeholder("Unsetbrenna"));
/// ```
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    PLACEHOLDER_TOKENS.contains(&trimmed)
}

/// Returns the trimmed answer, or `None` for null and placeholder values.
pub fn meaningful(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if PLACEHOLDER_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

/// Split a packed multi-choice answer into its selected options.
///
/// Parts are trimmed; empty parts and placeholder tokens are dropped.
///
/// ```
/// use survey_model::split_choices;
///
/// let parts: Vec<&str> = split_choices("Skole; Butikk;.;").collect();
/// assert_eq!(parts, vec!["Skole", "Butikk"]);
/// ```
pub fn split_choices(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(MULTI_CHOICE_DELIMITER)
        .map(str::trim)
        .filter(|part| !PLACEHOLDER_TOKENS.contains(part))
}
