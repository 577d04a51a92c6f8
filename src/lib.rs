//! Query-contract engine for browsing a remote contact directory.
//!
//! The engine reduces independently-mutable facet, search, sort, and
//! pagination selections into one canonical query used identically by the
//! paginated listing and the full-result export. The remote directory
//! service is reached through the `repository` trait seam; the
//! presentation layer sits on top of `services::session` and is not part
//! of this crate.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
