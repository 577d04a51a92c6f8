//! Reqwest implementation of the directory repository traits.

use std::time::Duration;

use crate::domain::contact::ListingPage;
use crate::domain::facet::FacetLists;
use crate::domain::query::{ExportContract, QueryContract};
use crate::dto::contacts::ContactsPagePayload;
use crate::dto::filters::FiltersPayload;
use crate::models::config::ClientConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CONTACTS_PATH, ContactExporter, ContactReader, DOWNLOAD_PATH, FILTERS_PATH, FacetReader,
};

/// HTTP client for the remote directory service.
#[derive(Clone, Debug)]
pub struct HttpDirectoryRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectoryRepository {
    /// Builds a client against the configured base address, applying the
    /// transport-level request timeout.
    pub fn new(config: &ClientConfig) -> RepositoryResult<Self> {
        let base_url = config.directory_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RepositoryError::InvalidBaseUrl(
                config.directory_url.clone(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| RepositoryError::Transport(err.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    /// Base address of the directory service, for callers that hand the
    /// export URL to a user agent instead of streaming it here.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ContactReader for HttpDirectoryRepository {
    async fn list_contacts(&self, contract: &QueryContract) -> RepositoryResult<ListingPage> {
        let query = contract
            .as_query_string()
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        let payload: ContactsPagePayload = self
            .client
            .get(self.url(CONTACTS_PATH, &query))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload.into())
    }
}

impl FacetReader for HttpDirectoryRepository {
    async fn list_facet_values(&self) -> RepositoryResult<FacetLists> {
        let payload: FiltersPayload = self
            .client
            .get(self.url(FILTERS_PATH, ""))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload.into())
    }
}

impl ContactExporter for HttpDirectoryRepository {
    async fn download_contacts(&self, contract: &ExportContract) -> RepositoryResult<Vec<u8>> {
        let query = contract
            .as_query_string()
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        let bytes = self
            .client
            .get(self.url(DOWNLOAD_PATH, &query))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
