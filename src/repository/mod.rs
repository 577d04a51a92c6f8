//! Trait seam between the engine and the remote directory service.

use crate::domain::contact::ListingPage;
use crate::domain::facet::FacetLists;
use crate::domain::query::{ExportContract, QueryContract};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Path of the paginated listing operation.
pub const CONTACTS_PATH: &str = "/contacts";
/// Path of the facet-enumeration operation.
pub const FILTERS_PATH: &str = "/filters";
/// Path of the full-result export operation.
pub const DOWNLOAD_PATH: &str = "/contacts/download";

/// Read access to the paginated contact listing.
#[allow(async_fn_in_trait)]
pub trait ContactReader {
    /// Fetches one page of contacts for the given contract.
    async fn list_contacts(&self, contract: &QueryContract) -> RepositoryResult<ListingPage>;
}

/// Read access to the facet enumerations.
#[allow(async_fn_in_trait)]
pub trait FacetReader {
    /// Fetches the enumerable values of every facet.
    async fn list_facet_values(&self) -> RepositoryResult<FacetLists>;
}

/// Access to the unpaginated export payload.
#[allow(async_fn_in_trait)]
pub trait ContactExporter {
    /// Downloads the full filtered result set as a file payload.
    async fn download_contacts(&self, contract: &ExportContract) -> RepositoryResult<Vec<u8>>;
}
