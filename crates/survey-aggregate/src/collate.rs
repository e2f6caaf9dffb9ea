//! Norwegian string collation for alphabetical chart ordering.
//!
//! Letters compare case-insensitively first, with `æ`, `ø` and `å` sorted
//! after `z` (Swedish/German `ä` and `ö` share the slots of `æ` and `ø`).
//! Whitespace and punctuation sort before digits, digits before letters.
//! Remaining ties prefer lowercase, then fall back to code point order so
//! that distinct strings never compare equal.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Weight {
    Symbol(u32),
    Digit(u32),
    Letter(u32),
}

fn primary_weight(ch: char) -> Weight {
    if ch.is_ascii_digit() {
        return Weight::Digit(ch as u32 - '0' as u32);
    }
    if !ch.is_alphabetic() {
        return Weight::Symbol(ch as u32);
    }
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    let rank = match lower {
        'a'..='z' => lower as u32 - 'a' as u32,
        'æ' | 'ä' => 26,
        'ø' | 'ö' => 27,
        'å' => 28,
        'é' | 'è' | 'ê' => 'e' as u32 - 'a' as u32,
        'ü' => 'u' as u32 - 'a' as u32,
        other => 100 + other as u32,
    };
    Weight::Letter(rank)
}

/// Compare two labels in Norwegian alphabetical order.
///
/// ```
/// use std::cmp::Ordering;
/// use survey_aggregate::collate::norwegian_cmp;
///
/// assert_eq!(norwegian_cmp("Åkrestrømmen", "Otnes"), Ordering::Greater);
/// assert_eq!(norwegian_cmp("bergset", "Hanestad"), Ordering::Less);
/// ```
pub fn norwegian_cmp(left: &str, right: &str) -> Ordering {
    let primary = left
        .chars()
        .map(primary_weight)
        .cmp(right.chars().map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }
    let case = left
        .chars()
        .map(char::is_uppercase)
        .cmp(right.chars().map(char::is_uppercase));
    if case != Ordering::Equal {
        return case;
    }
    left.cmp(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_letters_follow_z() {
        let mut words = vec!["Åkre", "Ørsta", "Zeta", "Ærfugl", "Annet"];
        words.sort_by(|a, b| norwegian_cmp(a, b));
        assert_eq!(words, vec!["Annet", "Zeta", "Ærfugl", "Ørsta", "Åkre"]);
    }

    #[test]
    fn case_is_secondary() {
        assert_eq!(norwegian_cmp("annet", "Annet"), Ordering::Less);
        assert_eq!(norwegian_cmp("Annet", "annet sted"), Ordering::Less);
        assert_eq!(norwegian_cmp("Otnes", "Otnes"), Ordering::Equal);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(norwegian_cmp("2-3 mill", "Under 2 mill"), Ordering::Less);
        assert_eq!(norwegian_cmp("10000-12500 kr", "5000-7500 kr"), Ordering::Less);
    }
}
