//! Domain aggregates exposed by the query-contract engine.

pub mod contact;
pub mod facet;
pub mod query;
pub mod selection;
pub mod sort;
pub mod types;
