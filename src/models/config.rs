//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::services::export::EXPORT_FILE_NAME;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the drivers.
pub struct ClientConfig {
    /// Base address of the remote directory service.
    pub directory_url: String,
    /// Transport-level request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Destination path for the stream-to-file export strategy.
    #[serde(default = "default_export_path")]
    pub export_path: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_export_path() -> String {
    EXPORT_FILE_NAME.to_string()
}
