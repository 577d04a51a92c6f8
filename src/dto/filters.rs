//! Wire payload of the facet-enumeration operation.

use serde::Deserialize;

use crate::domain::facet::FacetLists;

/// Response of the `/filters` operation: one ordered value list per facet,
/// without the unrestricted sentinel (that is a client-side concept).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersPayload {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub zip_codes: Vec<String>,
    #[serde(default)]
    pub area_codes: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl From<FiltersPayload> for FacetLists {
    fn from(payload: FiltersPayload) -> Self {
        Self {
            cities: payload.cities,
            zip_codes: payload.zip_codes,
            area_codes: payload.area_codes,
            categories: payload.categories,
        }
    }
}
