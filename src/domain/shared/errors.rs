use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
