//! Application Layer
//!
//! Use cases that orchestrate the business flow. Business rules live in the
//! domain layer; this layer wires registries, sources and storage together.
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Regenerate dataset, fingerprint and feature fragment
//! - `FeaturesUseCase` - Rewrite only the feature fragment
//! - `VerifyUseCase` - Check a dataset against its recorded fingerprint

pub mod features;
pub mod generate;
pub mod verify;

use std::path::PathBuf;

pub use features::{FeaturePlan, FeaturesOptions, FeaturesResult, FeaturesUseCase};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use verify::{VerifyOptions, VerifyUseCase};

use crate::domain::entities::Country;
use crate::domain::ports::FileSystem;
use crate::error::HoligenResult;
use crate::infrastructure::repositories::{
    CsvCountryRegistry, DEFAULT_CODE_COLUMN, DEFAULT_NAME_COLUMN,
};

/// Where the country registry lives and which columns to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    pub path: PathBuf,
    pub code_column: String,
    pub name_column: String,
}

impl RegistryOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
        }
    }

    pub fn with_columns(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.code_column = code.into();
        self.name_column = name.into();
        self
    }

    /// Load the registry in file order
    pub fn load<F: FileSystem>(&self, fs: &F) -> HoligenResult<Vec<Country>> {
        CsvCountryRegistry::with_columns(fs, &self.code_column, &self.name_column).load(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MockFileSystem;

    #[test]
    fn custom_columns_are_used() {
        let fs = MockFileSystem::new().with_file("c.csv", "code,label\nAA,Landia\n");
        let countries = RegistryOptions::new("c.csv")
            .with_columns("code", "label")
            .load(&fs)
            .unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].code(), "AA");
        assert_eq!(countries[0].name(), "Landia");
    }
}
