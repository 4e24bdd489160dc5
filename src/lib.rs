//! Post-processing for interaction-finder benchmark results.
//!
//! Loads the per-batch CSV files of the active run, normalizes them into
//! one analysis table and reports where the incremental algorithm
//! disagrees with the faulty baseline.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod report;

pub use app::CheckApp;
pub use config::Config;
pub use error::{PipelineError, Result};
