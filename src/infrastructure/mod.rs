//! Infrastructure layer: ingestion of registrar exports

pub mod error;
pub mod ingest;

pub use error::{InfraError, InfraResult};
pub use ingest::{load_roster, Roster};
