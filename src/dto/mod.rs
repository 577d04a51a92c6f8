//! DTO modules that bridge the wire payloads with the domain layer.

pub mod contacts;
pub mod filters;
