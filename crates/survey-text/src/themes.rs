//! Fixed theme list and keyword matching.

use serde::Serialize;

/// Bucket for responses that match no theme.
pub const OTHER_THEME: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    /// Lowercase fragments; a theme matches when any occurs in the text.
    pub keywords: &'static [&'static str],
}

impl Theme {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Themes in priority order. The first match is a response's primary theme.
pub const THEMES: &[Theme] = &[
    Theme {
        name: "Boligtyper",
        keywords: &[
            "leilighet",
            "enebolig",
            "blokk",
            "rekkehus",
            "bolig",
            "bygg",
            "boliger",
            "lavblokk",
            "leiligheter",
        ],
    },
    Theme {
        name: "Tomter & Regulering",
        keywords: &[
            "tomt",
            "regulere",
            "utvikling",
            "eiendom",
            "grunn",
            "skille",
            "tomter",
            "regulering",
            "utvikle",
        ],
    },
    Theme {
        name: "Økonomi",
        keywords: &[
            "pris",
            "avgift",
            "kostnad",
            "tilskudd",
            "støtte",
            "lån",
            "betale",
            "avgifter",
            "økonomi",
            "høy",
            "høye",
        ],
    },
    Theme {
        name: "Omsorg & Tilgjengelighet",
        keywords: &[
            "omsorg",
            "eldre",
            "tilgjengelighet",
            "helse",
            "redusert",
            "omsorgsbolig",
            "omsorgstjenester",
            "tilpasset",
        ],
    },
    Theme {
        name: "Infrastruktur",
        keywords: &[
            "skole",
            "butikk",
            "tjeneste",
            "møteplass",
            "kafé",
            "transport",
            "barnehage",
            "samfunnshus",
        ],
    },
    Theme {
        name: "Natur & Beliggenhet",
        keywords: &[
            "natur",
            "utsikt",
            "vatn",
            "sol",
            "rolig",
            "landlig",
            "friluftsliv",
            "naturlig",
            "solforhold",
        ],
    },
];

pub fn theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.name == name)
}

/// Every theme with a keyword contained in `text`, in list order.
///
/// Matching is plain substring containment on the lowercased text, so
/// `"tomter"` also matches the `"tomt"` keyword.
///
/// ```
/// use survey_text::classify_theme;
///
/// let names: Vec<&str> = classify_theme("Høye tomtepriser").iter().map(|t| t.name).collect();
/// assert_eq!(names, ["Tomter & Regulering", "Økonomi"]);
/// ```
pub fn classify_theme(text: &str) -> Vec<&'static Theme> {
    let lowered = text.to_lowercase();
    THEMES.iter().filter(|theme| theme.matches(&lowered)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keyword_means_no_theme() {
        assert!(classify_theme("Ingen kommentar her i dag").is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let themes = classify_theme("BARNEHAGE og SKOLE");
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name, "Infrastruktur");
    }

    #[test]
    fn lookup_by_name() {
        assert!(theme("Økonomi").is_some());
        assert!(theme(OTHER_THEME).is_none());
    }
}
