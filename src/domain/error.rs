//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// These are independent of ingestion and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown class-year code: {0}")]
    UnknownTier(String),

    #[error("invalid tree position: tree {tree}, branch {branch}")]
    InvalidPosition { tree: u8, branch: u8 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
