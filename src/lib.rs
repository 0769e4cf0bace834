//! hive-api-map: heuristic map of the public Swift API in a Hive checkout.
//!
//! The pipeline is discovery (`scan`) → extraction and aggregation
//! (`analyze`) → rendering (`generate`, `emit`). Extraction is regex based
//! and line oriented, so declarations split across lines are missed.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod scan;
pub mod types;

pub use error::{Result, ScanError};
