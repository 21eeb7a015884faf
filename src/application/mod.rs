//! Application layer: the allocation engine and the evaluator
//!
//! Both services are total functions over already-ingested data, so this
//! layer carries no error type of its own.

pub mod services;

pub use services::allocation::{AllocationEngine, ROUNDS};
pub use services::evaluation::{evaluate, MetricsReport};
