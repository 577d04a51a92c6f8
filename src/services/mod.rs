//! Services coordinating the drivers around the query contract.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod catalog;
pub mod export;
pub mod listing;
pub mod session;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("type constraint: {0}")]
    TypeConstraint(String),

    #[error("an export is already in progress")]
    ExportInProgress,

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
