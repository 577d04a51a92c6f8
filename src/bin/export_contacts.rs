//! Operational export utility: pulls the facet catalog and the first
//! listing page for the configured restriction, then streams the filtered
//! export to disk.

use std::env;
use std::path::Path;

use config::Config;
use dotenvy::dotenv;

use contact_directory::domain::facet::FacetCatalog;
use contact_directory::models::config::ClientConfig;
use contact_directory::repository::http::HttpDirectoryRepository;
use contact_directory::services::catalog::load_catalog;
use contact_directory::services::export::{ExportDriver, export_url};
use contact_directory::services::listing::fetch_page;
use contact_directory::services::session::DirectorySession;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpDirectoryRepository::new(&client_config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build directory client: {err}");
            std::process::exit(1);
        }
    };

    // A missing catalog degrades the facet controls but blocks nothing.
    let catalog = match load_catalog(&repo).await {
        Ok(catalog) => catalog,
        Err(_) => {
            log::warn!("Continuing with an empty facet catalog");
            FacetCatalog::new()
        }
    };

    let mut session = DirectorySession::new(catalog);
    let request = session.initial_request();
    let outcome = fetch_page(&repo, &request.contract).await;
    session.apply_listing(request.seq, outcome);

    match session.listing_error() {
        Some(message) => log::error!("{message}"),
        None => log::info!(
            "{} contact(s) across {} page(s)",
            session.total_contacts(),
            session.listing().total_pages
        ),
    }

    let contract = session.export_contract();
    match export_url(repo.base_url(), &contract) {
        Ok(url) => log::info!("Export also available at {url}"),
        Err(err) => log::warn!("Could not render export URL: {err}"),
    }

    let exporter = ExportDriver::new();
    match exporter
        .export_to_file(&repo, &contract, Path::new(&client_config.export_path))
        .await
    {
        Ok(written) => log::info!(
            "Exported {written} byte(s) to {}",
            client_config.export_path
        ),
        Err(err) => {
            log::error!("Export failed: {err}");
            std::process::exit(1);
        }
    }
}
