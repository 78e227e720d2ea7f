//! Infrastructure Layer
//!
//! Concrete implementations of domain ports: local file system, CSV
//! repositories and holiday sources.

pub mod fs;
pub mod repositories;
pub mod sources;

pub use fs::LocalFs;
pub use repositories::{CsvCountryRegistry, CsvDatasetRepository};
pub use sources::{SourceRegistry, StaticSource, TableSource};
