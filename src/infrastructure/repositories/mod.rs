//! Repository Implementations
//!
//! File-backed loading of the country registry and persistence of the
//! holiday dataset.

pub mod country_registry;
pub mod dataset;

pub use country_registry::{CsvCountryRegistry, DEFAULT_CODE_COLUMN, DEFAULT_NAME_COLUMN};
pub use dataset::{sidecar_path, CsvDatasetRepository, Recorded, Verification, WrittenDataset};
