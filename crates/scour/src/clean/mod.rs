//! Cleaning operations: imputation and deduplication.

mod engine;
mod operations;

pub use engine::CleanEngine;
pub use operations::{CleanChange, CleanOperation, CleanResult};
