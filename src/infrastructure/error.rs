//! Infrastructure errors (ingestion I/O and record validation)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Errors raised while reading a registrar export.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("cannot read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid record in {path} (line {line}): {source}")]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: DomainError,
    },
}

/// Result type for infrastructure operations.
pub type InfraResult<T> = Result<T, InfraError>;
