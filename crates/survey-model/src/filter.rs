use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ordering::{AGE_ORDER, LOCATION_ORDER, PURCHASE_ORDER};
use crate::schema::{FieldRef, fields};

/// One independently filterable demographic dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Age,
    Gender,
    Location,
    HouseholdType,
    EconomicCapacity,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::Age,
        Facet::Gender,
        Facet::Location,
        Facet::HouseholdType,
        Facet::EconomicCapacity,
    ];

    /// The questionnaire field the facet reads.
    pub fn field(self) -> FieldRef {
        match self {
            Facet::Age => fields::AGE,
            Facet::Gender => fields::GENDER,
            Facet::Location => fields::LOCATION,
            Facet::HouseholdType => fields::HOUSEHOLD,
            Facet::EconomicCapacity => fields::PURCHASE_CAPACITY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facet::Age => "Alder",
            Facet::Gender => "Kjønn",
            Facet::Location => "Område",
            Facet::HouseholdType => "Husstand",
            Facet::EconomicCapacity => "Kjøpekraft",
        }
    }

    /// Display order for the facet's options, when the options have one.
    pub fn reference_order(self) -> Option<&'static [&'static str]> {
        match self {
            Facet::Age => Some(AGE_ORDER),
            Facet::Location => Some(LOCATION_ORDER),
            Facet::EconomicCapacity => Some(PURCHASE_ORDER),
            Facet::Gender | Facet::HouseholdType => None,
        }
    }
}

/// Accepted labels per facet. An empty set places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub age: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub location: BTreeSet<String>,
    pub household_type: BTreeSet<String>,
    pub economic_capacity: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Age => &self.age,
            Facet::Gender => &self.gender,
            Facet::Location => &self.location,
            Facet::HouseholdType => &self.household_type,
            Facet::EconomicCapacity => &self.economic_capacity,
        }
    }

    fn accepted_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Age => &mut self.age,
            Facet::Gender => &mut self.gender,
            Facet::Location => &mut self.location,
            Facet::HouseholdType => &mut self.household_type,
            Facet::EconomicCapacity => &mut self.economic_capacity,
        }
    }

    /// Replace the accepted labels of one facet.
    pub fn set<I, S>(&mut self, facet: Facet, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.accepted_mut(facet) = labels.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn with<I, S>(mut self, facet: Facet, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(facet, labels);
        self
    }

    /// Check or uncheck a single option, as a filter checkbox does.
    pub fn toggle(&mut self, facet: Facet, label: &str, checked: bool) {
        let accepted = self.accepted_mut(facet);
        if checked {
            accepted.insert(label.to_string());
        } else {
            accepted.remove(label);
        }
    }

    /// Reset every facet.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        Facet::ALL
            .iter()
            .any(|&facet| !self.accepted(facet).is_empty())
    }

    /// Facets that currently constrain the response set.
    pub fn active_facets(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL
            .into_iter()
            .filter(|&facet| !self.accepted(facet).is_empty())
    }
}
