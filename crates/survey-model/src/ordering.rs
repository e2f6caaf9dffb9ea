//! Reference orderings for answer options with a natural sequence.

pub const AGE_ORDER: &[&str] = &[
    "Under 20 år",
    "20-29 år",
    "30-39 år",
    "40-49 år",
    "50-59 år",
    "60-69 år",
    "70 år eller eldre",
];

pub const LOCATION_ORDER: &[&str] = &[
    "Bergset",
    "Hanestad",
    "Otnes",
    "Åkrestrømmen",
    "Annet sted i Øvre Rendal",
    "Annet sted i Ytre Rendal",
];

/// Maximum purchase price brackets, lowest first.
pub const PURCHASE_ORDER: &[&str] = &[
    "Under 2 mill",
    "2-3 mill",
    "3-4 mill",
    "4-5 mill",
    "Over 5 mill",
    "Vet ikke",
];

/// Monthly rent brackets, lowest first.
pub const RENT_ORDER: &[&str] = &[
    "Under 5000 kr",
    "5000-7500 kr",
    "7500-10000 kr",
    "10000-12500 kr",
    "Over 12500 kr",
    "Vet ikke",
];

/// Most satisfied first.
pub const SATISFACTION_ORDER: &[&str] = &[
    "Svært fornøyd",
    "Fornøyd",
    "Nøytral",
    "Misfornøyd",
    "Svært misfornøyd",
];

/// Label used by the child-count question for zero children.
pub const NO_CHILDREN_LABEL: &str = "Ingen";
