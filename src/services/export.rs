//! The export driver: full-result downloads of the current view.
//!
//! Export is fire-and-forget relative to the listing: it never cancels,
//! blocks, or is blocked by listing fetches. Two transport strategies are
//! supported — streaming the payload to a local file, and handing the
//! export URL to the user agent. Both serialize the same contract, so the
//! server produces byte-identical files for identical selections.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::query::ExportContract;
use crate::repository::errors::RepositoryError;
use crate::repository::{ContactExporter, DOWNLOAD_PATH};
use crate::services::{ServiceError, ServiceResult};

/// Fixed file name used by the stream-to-file strategy.
pub const EXPORT_FILE_NAME: &str = "filtered_contacts.csv";

/// Guards against concurrent duplicate exports.
#[derive(Debug, Default)]
pub struct ExportDriver {
    in_flight: AtomicBool,
}

impl ExportDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Stream-to-file strategy: downloads the full filtered result set and
    /// writes it to `path`. A second export while one is in flight is
    /// rejected; the flag clears on success and failure alike, so the
    /// export control can never end up permanently disabled.
    pub async fn export_to_file<R>(
        &self,
        repo: &R,
        contract: &ExportContract,
        path: &Path,
    ) -> ServiceResult<u64>
    where
        R: ContactExporter,
    {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(ServiceError::ExportInProgress);
        }
        let result = download_to_file(repo, contract, path).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }
}

async fn download_to_file<R>(
    repo: &R,
    contract: &ExportContract,
    path: &Path,
) -> ServiceResult<u64>
where
    R: ContactExporter,
{
    let payload = repo.download_contacts(contract).await.map_err(|err| {
        log::error!("Failed to export contacts: {err}");
        ServiceError::from(err)
    })?;
    std::fs::write(path, &payload)?;
    Ok(payload.len() as u64)
}

/// Navigate-to-URL strategy: renders the export URL for the user agent to
/// download directly. No in-flight flag is needed since no response is
/// held client-side.
pub fn export_url(base_url: &str, contract: &ExportContract) -> ServiceResult<String> {
    let query = contract
        .as_query_string()
        .map_err(|err| RepositoryError::Serialization(err.to_string()))
        .map_err(ServiceError::from)?;
    let base = base_url.trim_end_matches('/');
    if query.is_empty() {
        Ok(format!("{base}{DOWNLOAD_PATH}"))
    } else {
        Ok(format!("{base}{DOWNLOAD_PATH}?{query}"))
    }
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::domain::facet::FacetCatalog;
    use crate::domain::query::build;
    use crate::domain::selection::SelectionState;
    use crate::repository::mock::MockDirectory;

    fn contract() -> ExportContract {
        build(&SelectionState::new(), &FacetCatalog::new()).export()
    }

    /// The payload lands on disk and the flag clears afterwards.
    #[tokio::test]
    async fn export_writes_payload_and_clears_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let mut repo = MockDirectory::new();
        repo.expect_download_contacts()
            .times(1)
            .returning(|_| Ok(b"Full Name,Email\n".to_vec()));

        let driver = ExportDriver::new();
        let written = driver
            .export_to_file(&repo, &contract(), &path)
            .await
            .unwrap();

        assert_eq!(written, 16);
        assert!(!driver.is_in_flight());
        assert_eq!(std::fs::read(&path).unwrap(), b"Full Name,Email\n");
    }

    /// A failed download clears the flag so the control is never stuck.
    #[tokio::test]
    async fn export_failure_clears_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        let mut repo = MockDirectory::new();
        repo.expect_download_contacts()
            .times(1)
            .returning(|_| Err(RepositoryError::Timeout));

        let driver = ExportDriver::new();
        let result = driver.export_to_file(&repo, &contract(), &path).await;

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::Timeout))
        ));
        assert!(!driver.is_in_flight());
        assert!(!path.exists());
    }
}
