use thiserror::Error;

use crate::smoke::SmokeError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("smoke check failed: {0}")]
    SmokeFailed(#[from] SmokeError),
}
