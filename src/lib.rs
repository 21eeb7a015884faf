//! webtree: course-seat allocation from ranked WebTree preferences.
//!
//! Students rank courses in a fixed tree structure (three depth-3 binary
//! trees plus a flat fallback list). A 4-round randomized greedy engine
//! walks each student's preference cursor under per-course capacity limits
//! and class-year priority, producing an assignment of at most four courses
//! per student. A priority-ordered heuristic, not an optimizer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
