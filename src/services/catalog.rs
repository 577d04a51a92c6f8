//! Facet catalog loading.

use crate::domain::facet::{FACET_KEYS, FacetCatalog, FacetLists};
use crate::domain::types::FacetValue;
use crate::repository::FacetReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches the facet enumerations and assembles the session catalog.
///
/// Values that fail the domain constraints — blanks and the reserved
/// sentinel — are dropped with a warning rather than failing the load; the
/// unrestricted choice is added by the presentation layer, never stored.
pub async fn load_catalog<R>(repo: &R) -> ServiceResult<FacetCatalog>
where
    R: FacetReader,
{
    let lists = repo.list_facet_values().await.map_err(|err| {
        log::error!("Failed to load facet catalog: {err}");
        ServiceError::from(err)
    })?;

    Ok(catalog_from_lists(&lists))
}

/// Builds a catalog from raw enumerations, skipping inadmissible values.
pub fn catalog_from_lists(lists: &FacetLists) -> FacetCatalog {
    let mut catalog = FacetCatalog::new();
    for key in FACET_KEYS {
        let mut values = Vec::new();
        let mut dropped = 0usize;
        for raw in lists.values(key) {
            match FacetValue::new(raw.as_str()) {
                Ok(value) => values.push(value),
                Err(_) => dropped += 1,
            }
        }
        if dropped > 0 {
            log::warn!("Dropped {dropped} inadmissible value(s) from the {key} enumeration");
        }
        catalog.replace_values(key, values);
    }
    catalog
}
