//! Application services

pub mod allocation;
pub mod evaluation;
