//! Shared test doubles for the integration suites.

use std::collections::VecDeque;
use std::sync::Mutex;

use contact_directory::domain::contact::ListingPage;
use contact_directory::domain::facet::FacetLists;
use contact_directory::domain::query::{ExportContract, QueryContract};
use contact_directory::repository::errors::RepositoryResult;
use contact_directory::repository::{ContactExporter, ContactReader, FacetReader};

/// In-memory stand-in for the remote directory service. Responses are
/// scripted per call; every received contract is recorded for assertions.
#[derive(Default)]
pub struct StubDirectory {
    pub facet_lists: FacetLists,
    pub listing_responses: Mutex<VecDeque<RepositoryResult<ListingPage>>>,
    pub listing_contracts: Mutex<Vec<QueryContract>>,
    pub export_payload: Vec<u8>,
    pub export_contracts: Mutex<Vec<ExportContract>>,
}

impl StubDirectory {
    pub fn with_facets(facet_lists: FacetLists) -> Self {
        Self {
            facet_lists,
            ..Self::default()
        }
    }

    /// Queues the next listing response.
    pub fn push_listing(&self, response: RepositoryResult<ListingPage>) {
        self.listing_responses.lock().unwrap().push_back(response);
    }

    /// Contracts the listing operation has received so far.
    pub fn seen_listing_contracts(&self) -> Vec<QueryContract> {
        self.listing_contracts.lock().unwrap().clone()
    }

    /// Contracts the export operation has received so far.
    pub fn seen_export_contracts(&self) -> Vec<ExportContract> {
        self.export_contracts.lock().unwrap().clone()
    }
}

impl ContactReader for StubDirectory {
    async fn list_contacts(&self, contract: &QueryContract) -> RepositoryResult<ListingPage> {
        self.listing_contracts.lock().unwrap().push(contract.clone());
        self.listing_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ListingPage::default()))
    }
}

impl FacetReader for StubDirectory {
    async fn list_facet_values(&self) -> RepositoryResult<FacetLists> {
        Ok(self.facet_lists.clone())
    }
}

impl ContactExporter for StubDirectory {
    async fn download_contacts(&self, contract: &ExportContract) -> RepositoryResult<Vec<u8>> {
        self.export_contracts.lock().unwrap().push(contract.clone());
        Ok(self.export_payload.clone())
    }
}
