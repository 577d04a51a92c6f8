//! The operator's mutable selection: facet choices, search, sort, paging.
//!
//! `SelectionState` is the only mutable entity in the engine. Every mutation
//! that changes what the result set *is* (facets, search, sort, page size)
//! resets the page position to 1; only direct page navigation leaves the
//! rest untouched.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::facet::{FacetCatalog, FacetKey, FacetMode};
use crate::domain::sort::{SortColumn, SortSpec};
use crate::domain::types::{FacetValue, PageSize, SearchTerm, TypeConstraintError};

/// Current page position and rows-per-page choice.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageWindow {
    number: u32,
    size: PageSize,
}

impl PageWindow {
    /// Page number, always at least 1.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Rows per page.
    pub fn size(&self) -> PageSize {
        self.size
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            number: 1,
            size: PageSize::default(),
        }
    }
}

/// Everything the operator has currently selected.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    facets: BTreeMap<FacetKey, BTreeSet<FacetValue>>,
    search: SearchTerm,
    sort: Option<SortSpec>,
    page: PageWindow,
}

impl SelectionState {
    /// A fresh, fully unrestricted selection on page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen values for one facet; empty means unrestricted.
    pub fn selected(&self, key: FacetKey) -> &BTreeSet<FacetValue> {
        static EMPTY: BTreeSet<FacetValue> = BTreeSet::new();
        self.facets.get(&key).unwrap_or(&EMPTY)
    }

    /// Current search term.
    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    /// Current sort, if any.
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Current page window.
    pub fn page(&self) -> PageWindow {
        self.page
    }

    /// Applies one facet choice, honoring the facet's cardinality mode:
    /// multi-select toggles membership, single-select replaces the previous
    /// choice (choosing the already-selected value clears it).
    ///
    /// The value must belong to the catalog's current enumeration.
    pub fn choose_value(
        &mut self,
        catalog: &FacetCatalog,
        key: FacetKey,
        value: FacetValue,
    ) -> Result<(), TypeConstraintError> {
        if !catalog.contains(key, &value) {
            return Err(TypeConstraintError::UnknownFacetValue(value.into_inner()));
        }
        let chosen = self.facets.entry(key).or_default();
        match catalog.mode(key) {
            FacetMode::Multi => {
                if !chosen.remove(&value) {
                    chosen.insert(value);
                }
            }
            FacetMode::Single => {
                if chosen.contains(&value) {
                    chosen.clear();
                } else {
                    chosen.clear();
                    chosen.insert(value);
                }
            }
        }
        self.reset_page();
        Ok(())
    }

    /// Replaces one facet's chosen set wholesale. Every value must belong
    /// to the catalog; on a single-select facet the last value wins.
    pub fn replace_values(
        &mut self,
        catalog: &FacetCatalog,
        key: FacetKey,
        values: Vec<FacetValue>,
    ) -> Result<(), TypeConstraintError> {
        for value in &values {
            if !catalog.contains(key, value) {
                return Err(TypeConstraintError::UnknownFacetValue(
                    value.as_str().to_string(),
                ));
            }
        }
        let chosen: BTreeSet<FacetValue> = match catalog.mode(key) {
            FacetMode::Multi => values.into_iter().collect(),
            FacetMode::Single => values.into_iter().last().into_iter().collect(),
        };
        self.facets.insert(key, chosen);
        self.reset_page();
        Ok(())
    }

    /// Clears one facet back to unrestricted (the "All" choice).
    pub fn clear_facet(&mut self, key: FacetKey) {
        self.facets.remove(&key);
        self.reset_page();
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, term: SearchTerm) {
        self.search = term;
        self.reset_page();
    }

    /// Sorts by the given column. A repeated sort on the active column
    /// toggles its direction; a different column starts ascending.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column,
                direction: spec.direction.toggled(),
            },
            _ => SortSpec::ascending(column),
        });
        self.reset_page();
    }

    /// Returns to the server's default order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.reset_page();
    }

    /// Changes the rows-per-page choice.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page.size = size;
        self.reset_page();
    }

    /// Navigates to a page, leaving every other selection untouched.
    pub fn set_page(&mut self, number: u32) -> Result<(), TypeConstraintError> {
        if number == 0 {
            return Err(TypeConstraintError::ZeroPage);
        }
        self.page.number = number;
        Ok(())
    }

    /// Clamps the page position into the last known page bounds. A zero
    /// `total_pages` means the bounds are not known yet and nothing changes.
    pub fn clamp_page(&mut self, total_pages: u32) {
        if total_pages > 0 && self.page.number > total_pages {
            self.page.number = total_pages;
        }
    }

    /// Adopts the server's answer for the current page position. The
    /// requested page number is a hint; the server's is authoritative.
    pub fn reconcile_page(&mut self, server_page: u32) {
        self.page.number = server_page.max(1);
    }

    /// Drops selected values no longer present in the catalog enumeration.
    /// Returns `true` when anything was dropped; the caller is expected to
    /// refetch in that case. A drop changes what the result set is, so the
    /// page position resets as for any other selection mutation.
    pub fn reconcile(&mut self, catalog: &FacetCatalog) -> bool {
        let mut changed = false;
        for (key, chosen) in self.facets.iter_mut() {
            let before = chosen.len();
            chosen.retain(|value| catalog.contains(*key, value));
            changed |= chosen.len() != before;
        }
        if changed {
            self.reset_page();
        }
        changed
    }

    fn reset_page(&mut self) {
        self.page.number = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facet::FacetMode;

    fn value(s: &str) -> FacetValue {
        FacetValue::new(s).unwrap()
    }

    fn catalog() -> FacetCatalog {
        let mut catalog = FacetCatalog::new();
        catalog.replace_values(
            FacetKey::City,
            vec![value("Austin"), value("Dallas"), value("Houston")],
        );
        catalog.replace_values(FacetKey::Category, vec![value("Vendor"), value("Customer")]);
        catalog
    }

    /// Facet mutations land on page 1 no matter where the operator was.
    #[test]
    fn facet_choice_resets_page() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        selection.set_page(7).unwrap();
        selection
            .choose_value(&catalog, FacetKey::City, value("Austin"))
            .unwrap();
        assert_eq!(selection.page().number(), 1);
    }

    /// Unknown values are rejected at the mutation boundary.
    #[test]
    fn unknown_value_is_rejected() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        let err = selection
            .choose_value(&catalog, FacetKey::City, value("Tulsa"))
            .unwrap_err();
        assert_eq!(
            err,
            TypeConstraintError::UnknownFacetValue("Tulsa".to_string())
        );
    }

    /// Multi-select toggles membership; re-choosing removes the value.
    #[test]
    fn multi_select_toggles() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        selection
            .choose_value(&catalog, FacetKey::City, value("Austin"))
            .unwrap();
        selection
            .choose_value(&catalog, FacetKey::City, value("Dallas"))
            .unwrap();
        assert_eq!(selection.selected(FacetKey::City).len(), 2);
        selection
            .choose_value(&catalog, FacetKey::City, value("Austin"))
            .unwrap();
        assert_eq!(selection.selected(FacetKey::City).len(), 1);
    }

    /// Single-select replaces the previous choice instead of accumulating.
    #[test]
    fn single_select_replaces() {
        let mut catalog = catalog();
        catalog.set_mode(FacetKey::City, FacetMode::Single);
        let mut selection = SelectionState::new();
        selection
            .choose_value(&catalog, FacetKey::City, value("Austin"))
            .unwrap();
        selection
            .choose_value(&catalog, FacetKey::City, value("Dallas"))
            .unwrap();
        let chosen: Vec<_> = selection
            .selected(FacetKey::City)
            .iter()
            .map(FacetValue::as_str)
            .collect();
        assert_eq!(chosen, vec!["Dallas"]);

        // Choosing the active value again clears the restriction.
        selection
            .choose_value(&catalog, FacetKey::City, value("Dallas"))
            .unwrap();
        assert!(selection.selected(FacetKey::City).is_empty());
    }

    /// Page navigation alone must not disturb any other selection.
    #[test]
    fn page_navigation_changes_only_the_page() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        selection
            .choose_value(&catalog, FacetKey::Category, value("Vendor"))
            .unwrap();
        selection.set_search(SearchTerm::new("smith"));
        let before = selection.clone();

        selection.set_page(3).unwrap();

        assert_eq!(selection.page().number(), 3);
        assert_eq!(selection.selected(FacetKey::Category), before.selected(FacetKey::Category));
        assert_eq!(selection.search(), before.search());
        assert_eq!(selection.sort(), before.sort());
        assert_eq!(selection.set_page(0), Err(TypeConstraintError::ZeroPage));
    }

    /// Sorting the same column twice toggles direction deterministically.
    #[test]
    fn repeated_sort_toggles_direction() {
        use crate::domain::sort::SortDirection;

        let mut selection = SelectionState::new();
        selection.sort_by(SortColumn::City);
        assert_eq!(
            selection.sort().unwrap().direction,
            SortDirection::Ascending
        );
        selection.set_page(4).unwrap();
        selection.sort_by(SortColumn::City);
        assert_eq!(
            selection.sort().unwrap().direction,
            SortDirection::Descending
        );
        assert_eq!(selection.page().number(), 1);
        selection.sort_by(SortColumn::City);
        assert_eq!(
            selection.sort().unwrap().direction,
            SortDirection::Ascending
        );
    }

    /// Catalog refresh silently drops selections that no longer enumerate.
    #[test]
    fn reconcile_drops_stale_values() {
        let catalog = catalog();
        let mut selection = SelectionState::new();
        selection
            .choose_value(&catalog, FacetKey::City, value("Austin"))
            .unwrap();
        selection
            .choose_value(&catalog, FacetKey::City, value("Houston"))
            .unwrap();

        let mut shrunk = FacetCatalog::new();
        shrunk.replace_values(FacetKey::City, vec![value("Austin")]);

        assert!(selection.reconcile(&shrunk));
        let chosen: Vec<_> = selection
            .selected(FacetKey::City)
            .iter()
            .map(FacetValue::as_str)
            .collect();
        assert_eq!(chosen, vec!["Austin"]);

        // A second pass with the same catalog is a no-op.
        assert!(!selection.reconcile(&shrunk));
    }

    /// Clamping respects unknown bounds and overlong positions.
    #[test]
    fn clamp_page_honors_known_bounds() {
        let mut selection = SelectionState::new();
        selection.set_page(9).unwrap();
        selection.clamp_page(0);
        assert_eq!(selection.page().number(), 9);
        selection.clamp_page(4);
        assert_eq!(selection.page().number(), 4);
    }
}
