//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contact::ListingPage;
use crate::domain::facet::FacetLists;
use crate::domain::query::{ExportContract, QueryContract};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactExporter, ContactReader, FacetReader};

mock! {
    pub Directory {}

    impl ContactReader for Directory {
        async fn list_contacts(&self, contract: &QueryContract) -> RepositoryResult<ListingPage>;
    }

    impl FacetReader for Directory {
        async fn list_facet_values(&self) -> RepositoryResult<FacetLists>;
    }

    impl ContactExporter for Directory {
        async fn download_contacts(&self, contract: &ExportContract) -> RepositoryResult<Vec<u8>>;
    }
}
