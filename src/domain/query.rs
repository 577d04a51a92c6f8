//! The canonical query contract and the pure builder that produces it.
//!
//! Both the paginated listing and the full-result export are driven by the
//! same projection of the operator's selection. Semantically equivalent
//! selections must serialize identically: an empty chosen set, a chosen set
//! covering the whole enumeration, and the sentinel all mean "no
//! restriction" and all serialize as the sentinel.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::facet::{FacetCatalog, FacetKey};
use crate::domain::selection::SelectionState;
use crate::domain::types::FacetValue;

/// Reserved wire value meaning "no restriction" for a facet.
pub const ALL_SENTINEL: &str = "All";

/// Canonical flat request for the paginated listing. Field declaration
/// order fixes the key order, so equal contracts render byte-identical
/// query strings.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QueryContract {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "sortColumn", skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    pub city: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "areaCode")]
    pub area_code: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl QueryContract {
    /// The same contract restricted to its non-pagination fields, as the
    /// export operation requires.
    pub fn export(&self) -> ExportContract {
        ExportContract {
            sort_column: self.sort_column.clone(),
            sort_order: self.sort_order.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
            area_code: self.area_code.clone(),
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }

    /// Renders the contract as a URL query string. Percent-encoding happens
    /// here, at the transport boundary.
    pub fn as_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }
}

/// Canonical flat request for the unpaginated export: the listing contract
/// minus its page window.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ExportContract {
    #[serde(rename = "sortColumn", skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    pub city: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "areaCode")]
    pub area_code: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ExportContract {
    /// Renders the contract as a URL query string.
    pub fn as_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }
}

/// Reduces the current selection to its canonical contract.
///
/// Total, pure, and deterministic: no I/O, no hidden state, and no failure
/// path. Malformed inputs cannot reach this point; they are rejected at the
/// selection mutation boundary.
pub fn build(selection: &SelectionState, catalog: &FacetCatalog) -> QueryContract {
    QueryContract {
        page: selection.page().number(),
        limit: selection.page().size().get(),
        sort_column: selection.sort().map(|s| s.column.as_str().to_string()),
        sort_order: selection.sort().map(|s| s.direction.as_str().to_string()),
        city: serialize_facet(selection.selected(FacetKey::City), catalog, FacetKey::City),
        zip_code: serialize_facet(
            selection.selected(FacetKey::ZipCode),
            catalog,
            FacetKey::ZipCode,
        ),
        area_code: serialize_facet(
            selection.selected(FacetKey::AreaCode),
            catalog,
            FacetKey::AreaCode,
        ),
        category: serialize_facet(
            selection.selected(FacetKey::Category),
            catalog,
            FacetKey::Category,
        ),
        search: selection.search().restriction().map(str::to_string),
    }
}

/// Serializes one facet's chosen set.
///
/// Chosen values are emitted in catalog order, never click order, so that
/// identical selections always produce identical contracts. An empty set, a
/// set covering the entire enumeration, and a set of only-stale values all
/// collapse to the sentinel.
fn serialize_facet(chosen: &BTreeSet<FacetValue>, catalog: &FacetCatalog, key: FacetKey) -> String {
    if chosen.is_empty() {
        return ALL_SENTINEL.to_string();
    }
    let enumeration = catalog.values(key);
    let ordered: Vec<&str> = enumeration
        .iter()
        .filter(|value| chosen.contains(value))
        .map(FacetValue::as_str)
        .collect();
    if ordered.is_empty() || ordered.len() == enumeration.len() {
        return ALL_SENTINEL.to_string();
    }
    ordered.join(",")
}
