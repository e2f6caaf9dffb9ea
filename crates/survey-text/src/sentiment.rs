use survey_model::Sentiment;

pub const POSITIVE_WORDS: &[&str] = &[
    "bra",
    "flott",
    "fint",
    "positivt",
    "optimisme",
    "viktig",
    "heier",
    "godt",
    "bedre",
    "fornøyd",
    "bør",
    "fantastisk",
    "gleder",
    "supert",
    "interessant",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "problem",
    "utfordring",
    "høy",
    "mangel",
    "dårlig",
    "mangler",
    "vanskelig",
    "hindring",
    "umulig",
    "dyrt",
    "komplisert",
    "savner",
    "krevende",
    "kostbart",
];

/// Label a text by how many positive and negative words it contains.
///
/// Each word counts once however often it occurs. A tie is neutral.
///
/// ```
/// use survey_model::Sentiment;
/// use survey_text::classify_sentiment;
///
/// assert_eq!(classify_sentiment("Et problem, men bra initiativ"), Sentiment::Neutral);
/// assert_eq!(classify_sentiment("Fantastisk sted å bo"), Sentiment::Positive);
/// ```
pub fn classify_sentiment(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let positive = count_present(&lowered, POSITIVE_WORDS);
    let negative = count_present(&lowered, NEGATIVE_WORDS);
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn count_present(lowered: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| lowered.contains(*word)).count()
}
