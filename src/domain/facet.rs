//! Facet dimensions and the per-session catalog of their enumerable values.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{FacetValue, TypeConstraintError};

/// One independently filterable dimension of the contact directory.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetKey {
    City,
    ZipCode,
    AreaCode,
    Category,
}

/// All facets in their fixed presentation order.
pub const FACET_KEYS: [FacetKey; 4] = [
    FacetKey::City,
    FacetKey::ZipCode,
    FacetKey::AreaCode,
    FacetKey::Category,
];

impl FacetKey {
    /// Stable identifier used by forms and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            FacetKey::City => "city",
            FacetKey::ZipCode => "zipCode",
            FacetKey::AreaCode => "areaCode",
            FacetKey::Category => "category",
        }
    }
}

impl Display for FacetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FacetKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(FacetKey::City),
            "zipCode" => Ok(FacetKey::ZipCode),
            "areaCode" => Ok(FacetKey::AreaCode),
            "category" => Ok(FacetKey::Category),
            other => Err(TypeConstraintError::UnknownFacet(other.to_string())),
        }
    }
}

/// Cardinality mode of a facet. The directory has shipped both single-select
/// dropdowns and multi-select pickers; the engine supports either per facet.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FacetMode {
    /// At most one chosen value; choosing replaces the previous choice.
    Single,
    /// Any subset of the enumeration; choosing toggles membership.
    #[default]
    Multi,
}

/// Raw facet enumerations as the directory service reports them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetLists {
    pub cities: Vec<String>,
    pub zip_codes: Vec<String>,
    pub area_codes: Vec<String>,
    pub categories: Vec<String>,
}

impl FacetLists {
    /// Borrow the list belonging to the given facet.
    pub fn values(&self, key: FacetKey) -> &[String] {
        match key {
            FacetKey::City => &self.cities,
            FacetKey::ZipCode => &self.zip_codes,
            FacetKey::AreaCode => &self.area_codes,
            FacetKey::Category => &self.categories,
        }
    }
}

/// Enumerated values for every facet, refreshed once per session.
///
/// Values keep the order the directory service reported them in; that order
/// is what makes contract serialization deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetCatalog {
    values: BTreeMap<FacetKey, Vec<FacetValue>>,
    modes: BTreeMap<FacetKey, FacetMode>,
}

impl FacetCatalog {
    /// An empty catalog with every facet in the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one facet's enumeration, de-duplicating while preserving
    /// first-seen order.
    pub fn replace_values(&mut self, key: FacetKey, values: Vec<FacetValue>) {
        let mut seen = BTreeSet::new();
        let deduped = values
            .into_iter()
            .filter(|v| seen.insert(v.clone()))
            .collect();
        self.values.insert(key, deduped);
    }

    /// Overrides the cardinality mode of one facet.
    pub fn set_mode(&mut self, key: FacetKey, mode: FacetMode) {
        self.modes.insert(key, mode);
    }

    /// Cardinality mode of the given facet.
    pub fn mode(&self, key: FacetKey) -> FacetMode {
        self.modes.get(&key).copied().unwrap_or_default()
    }

    /// Enumerated values of the given facet, in catalog order.
    pub fn values(&self, key: FacetKey) -> &[FacetValue] {
        self.values.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the value is part of the facet's current enumeration.
    pub fn contains(&self, key: FacetKey, value: &FacetValue) -> bool {
        self.values(key).contains(value)
    }

    /// True when no facet has any enumerated values yet.
    pub fn is_empty(&self) -> bool {
        FACET_KEYS.iter().all(|key| self.values(*key).is_empty())
    }
}
