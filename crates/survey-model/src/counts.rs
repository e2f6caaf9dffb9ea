use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Option label to occurrence count.
///
/// Labels keep the order in which they were first counted so that repeated
/// runs over the same data produce the same rows. Callers that care about
/// presentation order sort the chart rows explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCount {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CategoryCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    pub fn add(&mut self, label: &str, amount: u64) {
        match self.index.get(label) {
            Some(&position) => self.entries[position].1 += amount,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), amount));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.index
            .get(label)
            .map(|&position| self.entries[position].1)
    }

    /// Count for `label`, zero when it never occurred.
    pub fn count_of(&self, label: &str) -> u64 {
        self.get(label).unwrap_or(0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts. For multi-choice fields this can exceed the
    /// number of responses.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for CategoryCount {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (label, amount) in iter {
            counts.add(label.as_ref(), amount);
        }
        counts
    }
}

impl Serialize for CategoryCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
