//! The interactive browsing session and its reconciliation rules.
//!
//! The session owns the only mutable state in the engine. Every selection
//! mutation schedules exactly one listing invocation, identified by a
//! monotonically increasing sequence number; a response is applied only if
//! no newer request has been issued since (last-request-wins). The rule is
//! independent of any particular concurrency primitive — callers may run
//! the fetches however they like and feed outcomes back here.

use crate::domain::contact::ListingPage;
use crate::domain::facet::{FacetCatalog, FacetKey};
use crate::domain::query::{ExportContract, QueryContract, build};
use crate::domain::selection::SelectionState;
use crate::domain::sort::SortColumn;
use crate::domain::types::{FacetValue, PageSize, SearchTerm};
use crate::services::ServiceResult;

/// Message surfaced to the operator while the listing is in a failed state.
pub const LISTING_FAILURE_MESSAGE: &str = "Failed to load contacts, try again";

/// One scheduled listing invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    pub seq: u64,
    pub contract: QueryContract,
}

/// Whether a listing outcome was adopted or discarded as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
}

/// State of one operator's browsing session.
#[derive(Clone, Debug, Default)]
pub struct DirectorySession {
    selection: SelectionState,
    catalog: FacetCatalog,
    listing: ListingPage,
    listing_error: Option<String>,
    issued_seq: u64,
}

impl DirectorySession {
    /// A fresh session around an already-loaded catalog.
    pub fn new(catalog: FacetCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current facet catalog.
    pub fn catalog(&self) -> &FacetCatalog {
        &self.catalog
    }

    /// Last good listing page.
    pub fn listing(&self) -> &ListingPage {
        &self.listing
    }

    /// Operator-visible listing failure, if the latest fetch failed.
    pub fn listing_error(&self) -> Option<&str> {
        self.listing_error.as_deref()
    }

    /// Total records matching the current restriction, per the last fetch.
    pub fn total_contacts(&self) -> u64 {
        self.listing.total_contacts
    }

    /// The request for the initial page load.
    pub fn initial_request(&mut self) -> ListingRequest {
        self.schedule()
    }

    /// Applies one facet choice and schedules the refetch.
    pub fn choose_facet_value(
        &mut self,
        key: FacetKey,
        value: FacetValue,
    ) -> ServiceResult<ListingRequest> {
        self.selection.choose_value(&self.catalog, key, value)?;
        Ok(self.schedule())
    }

    /// Replaces one facet's chosen set and schedules the refetch.
    pub fn replace_facet_values(
        &mut self,
        key: FacetKey,
        values: Vec<FacetValue>,
    ) -> ServiceResult<ListingRequest> {
        self.selection.replace_values(&self.catalog, key, values)?;
        Ok(self.schedule())
    }

    /// Clears one facet back to unrestricted and schedules the refetch.
    pub fn clear_facet(&mut self, key: FacetKey) -> ListingRequest {
        self.selection.clear_facet(key);
        self.schedule()
    }

    /// Replaces the search term and schedules the refetch.
    pub fn set_search(&mut self, term: SearchTerm) -> ListingRequest {
        self.selection.set_search(term);
        self.schedule()
    }

    /// Sorts by a column (toggling direction on repeat) and schedules the
    /// refetch.
    pub fn sort_by(&mut self, column: SortColumn) -> ListingRequest {
        self.selection.sort_by(column);
        self.schedule()
    }

    /// Returns to server default order and schedules the refetch.
    pub fn clear_sort(&mut self) -> ListingRequest {
        self.selection.clear_sort();
        self.schedule()
    }

    /// Changes rows-per-page and schedules the refetch.
    pub fn set_page_size(&mut self, size: PageSize) -> ListingRequest {
        self.selection.set_page_size(size);
        self.schedule()
    }

    /// Navigates to the given page and schedules the refetch.
    pub fn go_to_page(&mut self, number: u32) -> ServiceResult<ListingRequest> {
        self.selection.set_page(number)?;
        Ok(self.schedule())
    }

    /// Navigates to the first page.
    pub fn first_page(&mut self) -> ListingRequest {
        self.selection.reconcile_page(1);
        self.schedule()
    }

    /// Navigates one page back, saturating at the first page.
    pub fn previous_page(&mut self) -> ListingRequest {
        let current = self.selection.page().number();
        self.selection.reconcile_page(current.saturating_sub(1));
        self.schedule()
    }

    /// Navigates one page forward; the schedule step clamps into bounds.
    pub fn next_page(&mut self) -> ListingRequest {
        let current = self.selection.page().number();
        self.selection.reconcile_page(current.saturating_add(1));
        self.schedule()
    }

    /// Navigates to the last known page.
    pub fn last_page(&mut self) -> ListingRequest {
        let total = self.listing.total_pages.max(1);
        self.selection.reconcile_page(total);
        self.schedule()
    }

    /// Feeds a listing outcome back into the session.
    ///
    /// Outcomes for anything but the newest issued request are discarded —
    /// a slow, stale response must never overwrite a newer one. On success
    /// the server's page counters overwrite the requested position; on
    /// failure the last good page is kept and a recoverable error message
    /// is raised, to be cleared by the next success.
    pub fn apply_listing(
        &mut self,
        seq: u64,
        outcome: ServiceResult<ListingPage>,
    ) -> ApplyOutcome {
        if seq != self.issued_seq {
            return ApplyOutcome::Stale;
        }
        match outcome {
            Ok(page) => {
                self.selection.reconcile_page(page.current_page);
                self.listing = page;
                self.listing_error = None;
            }
            Err(_) => {
                self.listing_error = Some(LISTING_FAILURE_MESSAGE.to_string());
            }
        }
        ApplyOutcome::Applied
    }

    /// Adopts a refreshed catalog, dropping selections that no longer
    /// enumerate. Returns the refetch request when anything was dropped.
    /// A failed refresh degrades silently: the previous catalog stays.
    pub fn refresh_catalog(
        &mut self,
        outcome: ServiceResult<FacetCatalog>,
    ) -> Option<ListingRequest> {
        match outcome {
            Ok(catalog) => {
                self.catalog = catalog;
                if self.selection.reconcile(&self.catalog) {
                    Some(self.schedule())
                } else {
                    None
                }
            }
            Err(err) => {
                log::warn!("Facet catalog refresh failed: {err}");
                None
            }
        }
    }

    /// The export projection of the current selection. Always built from
    /// the same selection and catalog as the listing contract, so the two
    /// agree on every non-pagination field.
    pub fn export_contract(&self) -> ExportContract {
        build(&self.selection, &self.catalog).export()
    }

    fn schedule(&mut self) -> ListingRequest {
        self.selection.clamp_page(self.listing.total_pages);
        self.issued_seq += 1;
        ListingRequest {
            seq: self.issued_seq,
            contract: build(&self.selection, &self.catalog),
        }
    }
}
