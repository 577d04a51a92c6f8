//! Listing fetches against the directory repository.

use crate::domain::contact::ListingPage;
use crate::domain::query::QueryContract;
use crate::repository::ContactReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches one page of contacts for the given contract.
pub async fn fetch_page<R>(repo: &R, contract: &QueryContract) -> ServiceResult<ListingPage>
where
    R: ContactReader,
{
    repo.list_contacts(contract).await.map_err(|err| {
        log::error!("Failed to load contacts: {err}");
        ServiceError::from(err)
    })
}
