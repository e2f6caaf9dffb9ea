//! One flat row per response for spreadsheet export.

use serde::ser::{Serialize, SerializeMap, Serializer};

use survey_model::{FieldRef, Response, fields};

pub const RESPONDENT_COLUMN: &str = "Respondent ID";

/// Exported columns after the respondent number, with their source field.
pub const FIELD_COLUMNS: &[(&str, FieldRef)] = &[
    ("Timestamp", fields::START_TIME),
    ("Alder", fields::AGE),
    ("Kjønn", fields::GENDER),
    ("Husstand", fields::HOUSEHOLD),
    ("Livssituasjon", fields::LIFE_SITUATION),
    ("Antall barn", fields::CHILDREN),
    ("Eier/Leier", fields::OWNERSHIP),
    ("Boligtype", fields::DWELLING_TYPE),
    ("Fornøydhet", fields::SATISFACTION),
    ("Bostedsadresse", fields::REGISTERED_ADDRESS),
    ("Flytteplaner", fields::MOVING_PLANS),
    ("Destinasjoner", fields::DESTINATIONS),
    ("Kjøpekraft", fields::PURCHASE_CAPACITY),
    ("Leiekraft", fields::RENT_CAPACITY),
    ("Kjenner bostøtte", fields::HOUSING_ALLOWANCE),
    ("Kjenner startlån", fields::STARTER_LOAN),
    ("Område", fields::LOCATION),
    ("Sektor", fields::SECTOR),
];

/// Column headers in export order.
pub fn flat_columns() -> impl Iterator<Item = &'static str> {
    std::iter::once(RESPONDENT_COLUMN).chain(FIELD_COLUMNS.iter().map(|(column, _)| *column))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    /// 1-based position in the exported set, not the response id.
    pub respondent: usize,
    /// One value per entry of [`FIELD_COLUMNS`]; missing answers are empty.
    pub values: Vec<String>,
}

impl FlatRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        if column == RESPONDENT_COLUMN {
            return None;
        }
        let position = FIELD_COLUMNS.iter().position(|(name, _)| *name == column)?;
        self.values.get(position).map(String::as_str)
    }

    /// Cells in column order, respondent number first.
    pub fn record(&self) -> Vec<String> {
        std::iter::once(self.respondent.to_string())
            .chain(self.values.iter().cloned())
            .collect()
    }
}

impl Serialize for FlatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COLUMNS.len() + 1))?;
        map.serialize_entry(RESPONDENT_COLUMN, &self.respondent)?;
        for ((column, _), value) in FIELD_COLUMNS.iter().zip(&self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Project responses onto the export columns, numbering them from 1.
pub fn flatten_responses<'a, I>(responses: I) -> Vec<FlatRow>
where
    I: IntoIterator<Item = &'a Response>,
{
    responses
        .into_iter()
        .enumerate()
        .map(|(index, response)| FlatRow {
            respondent: index + 1,
            values: FIELD_COLUMNS
                .iter()
                .map(|(_, field)| response.value(*field).unwrap_or_default().to_string())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_in_export_order() {
        let columns: Vec<&str> = flat_columns().collect();
        assert_eq!(columns.len(), 19);
        assert_eq!(columns[0], "Respondent ID");
        assert_eq!(columns[1], "Timestamp");
        assert_eq!(columns[18], "Sektor");
    }

    #[test]
    fn missing_values_are_empty() {
        let responses = [
            Response::new(40).with_answer(fields::GENDER, Some("Mann")),
            Response::new(7).with_answer(fields::GENDER, None),
        ];
        let rows = flatten_responses(&responses);
        assert_eq!(rows[0].respondent, 1);
        assert_eq!(rows[1].respondent, 2);
        assert_eq!(rows[0].get("Kjønn"), Some("Mann"));
        assert_eq!(rows[1].get("Kjønn"), Some(""));
        assert_eq!(rows[0].get("Sektor"), Some(""));
        assert_eq!(rows[0].record().len(), 19);
    }
}
