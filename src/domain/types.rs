//! Strongly-typed value objects used by the query-contract engine.
//!
//! These wrappers enforce basic invariants (non-empty facet values, the
//! reserved sentinel kept out of the catalog, page sizes from the fixed
//! set) so that once a value reaches the domain layer it can be treated as
//! trusted.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::query::ALL_SENTINEL;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided facet value collides with the unrestricted sentinel.
    #[error("\"{ALL_SENTINEL}\" is reserved and cannot be a catalog value")]
    ReservedSentinel,
    /// Provided facet value is not part of the current catalog enumeration.
    #[error("unknown facet value: {0}")]
    UnknownFacetValue(String),
    /// Provided facet identifier does not name a filterable dimension.
    #[error("unknown facet: {0}")]
    UnknownFacet(String),
    /// Provided sort column does not name a contact column.
    #[error("unknown sort column: {0}")]
    UnknownSortColumn(String),
    /// Provided page size is outside the allowed set.
    #[error("page size {0} is not one of the allowed sizes")]
    InvalidPageSize(u32),
    /// Page numbers start at one.
    #[error("page number must be greater than zero")]
    ZeroPage,
}

/// One enumerated value of a facet, trimmed and never equal to the sentinel.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacetValue(String);

impl FacetValue {
    /// Constructs a trimmed, non-empty value, rejecting the reserved sentinel.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed == ALL_SENTINEL {
            return Err(TypeConstraintError::ReservedSentinel);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for FacetValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FacetValue {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FacetValue {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FacetValue> for String {
    fn from(value: FacetValue) -> Self {
        value.0
    }
}

/// Free-text search input. Trimmed on construction; the empty term means
/// "no restriction". Percent-encoding is left to the transport boundary.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Wraps a raw input string, trimming surrounding whitespace.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into().trim().to_string())
    }

    /// An empty term restricts nothing.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// The term as a restriction, or `None` when it restricts nothing.
    pub fn restriction(&self) -> Option<&str> {
        if self.is_unrestricted() {
            None
        } else {
            Some(&self.0)
        }
    }

    /// Borrow the raw trimmed string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Page sizes the listing accepts.
pub const ALLOWED_PAGE_SIZES: [u32; 5] = [10, 25, 50, 100, 1000];

/// Rows-per-page choice restricted to [`ALLOWED_PAGE_SIZES`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Validates the size against the fixed set of allowed values.
    pub fn new(size: u32) -> Result<Self, TypeConstraintError> {
        if ALLOWED_PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(TypeConstraintError::InvalidPageSize(size))
        }
    }

    /// Returns the raw `u32` backing this page size.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(ALLOWED_PAGE_SIZES[0])
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.0
    }
}
