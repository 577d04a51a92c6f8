//! Form definitions backing the presentation layer's control mutations.

use thiserror::Error;
use validator::ValidationErrors;

pub mod controls;

#[derive(Debug, Error)]
/// Errors that can occur when processing control input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unknown facet")]
    UnknownFacet,

    #[error("unknown sort column")]
    UnknownSortColumn,

    #[error("invalid facet value")]
    InvalidFacetValue,

    #[error("invalid page size")]
    InvalidPageSize,
}
