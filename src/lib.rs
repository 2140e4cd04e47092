//! Construction Hours Estimator Library
//!
//! This library provides the estimation catalog, the selection engine and the
//! terminal form that drives it.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod engine;
pub mod error;
pub mod report;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, FormField};
pub use catalog::{Catalog, CatalogItem, CategoryEntry, TaskEntry};
pub use engine::{
    compute_hours, CommandOutcome, Estimate, EstimationEngine, FormCommand, FormSnapshot,
    SelectionState,
};
pub use error::{EstimatorError, Result};
pub use types::SizeClass;
