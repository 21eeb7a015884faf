//! Domain layer: entities and the WebTree traversal rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no ingestion).

pub mod cursor;
pub mod entities;
pub mod error;
pub mod ledger;
pub mod position;
pub mod preferences;

pub use cursor::{Cursor, CursorState};
pub use entities::{Assignment, Crn, Student, StudentId, Tier, MAX_GRANTS};
pub use error::{DomainError, DomainResult};
pub use ledger::CapacityLedger;
pub use position::{TreePosition, FALLBACK_TREE, SLOT_COUNT};
pub use preferences::PreferenceStore;
