//! Control inputs as the presentation layer submits them.
//!
//! Forms are the mutation boundary: raw strings and numbers are validated
//! and converted into domain values here, so malformed page sizes, unknown
//! facets, and reserved values never reach the selection state.

use serde::Deserialize;
use validator::Validate;

use crate::domain::facet::FacetKey;
use crate::domain::sort::SortColumn;
use crate::domain::types::{FacetValue, PageSize, SearchTerm};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// A facet picker change: the facet identifier plus the full chosen set.
pub struct FacetSelectionForm {
    #[validate(length(min = 1))]
    pub facet: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl FacetSelectionForm {
    /// Validates and converts into the facet key and its chosen values.
    pub fn into_selection(self) -> Result<(FacetKey, Vec<FacetValue>), FormError> {
        self.validate()?;
        let key: FacetKey = self.facet.parse().map_err(|_| FormError::UnknownFacet)?;
        let values = self
            .values
            .into_iter()
            .map(FacetValue::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| FormError::InvalidFacetValue)?;
        Ok((key, values))
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Free-text search input.
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

impl From<SearchForm> for SearchTerm {
    fn from(form: SearchForm) -> Self {
        SearchTerm::new(form.q)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// A column-header sort click.
pub struct SortForm {
    #[validate(length(min = 1))]
    pub column: String,
}

impl TryFrom<SortForm> for SortColumn {
    type Error = FormError;

    fn try_from(form: SortForm) -> Result<Self, Self::Error> {
        form.validate()?;
        form.column
            .parse()
            .map_err(|_| FormError::UnknownSortColumn)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// A rows-per-page change.
pub struct PageSizeForm {
    pub size: u32,
}

impl TryFrom<PageSizeForm> for PageSize {
    type Error = FormError;

    fn try_from(form: PageSizeForm) -> Result<Self, Self::Error> {
        PageSize::new(form.size).map_err(|_| FormError::InvalidPageSize)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// A pagination button press.
pub struct PageForm {
    #[validate(range(min = 1))]
    pub page: u32,
}
