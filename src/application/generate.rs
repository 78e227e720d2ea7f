//! Generate Use Case
//!
//! Orchestrates a full regeneration:
//! 1. Load the country registry
//! 2. Aggregate holidays of every country over the year range
//! 3. Serialize the dataset and compute its fingerprint
//! 4. Compute the feature fragment rewrite
//! 5. Write dataset, sidecar and fragment
//!
//! Every fatal input condition (unreadable registry, failing source, missing
//! anchor) is detected before the first write, so a failed run leaves the
//! previous artifacts as they were.

use std::path::PathBuf;

use tracing::info;

use crate::domain::ports::{FileSystem, HolidaySourceLookup};
use crate::domain::services::Aggregator;
use crate::domain::value_objects::YearRange;
use crate::error::HoligenResult;
use crate::infrastructure::repositories::{CsvDatasetRepository, WrittenDataset};

use super::features::FeaturePlan;
use super::RegistryOptions;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub registry: RegistryOptions,
    /// Dataset CSV path; the sidecar is derived from it
    pub dataset: PathBuf,
    /// Fragment holding the feature entries
    pub fragment: PathBuf,
    /// Aggregate entry key
    pub anchor: String,
    /// Years to generate
    pub years: YearRange,
    /// Compute everything, write nothing
    pub dry_run: bool,
}

/// Result of a generate run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Countries loaded from the registry
    pub countries: usize,
    /// Codes with a holiday source
    pub resolved: Vec<String>,
    /// Codes skipped for lack of a source
    pub skipped: Vec<String>,
    /// Codes listed more than once in the registry
    pub duplicates: Vec<String>,
    /// Dataset artifacts (not on disk when `written` is false)
    pub dataset: WrittenDataset,
    /// Fragment rewrite
    pub features: FeaturePlan,
    /// Whether artifacts were written
    pub written: bool,
}

/// Generate use case
pub struct GenerateUseCase<'a, F: FileSystem, L: HolidaySourceLookup + ?Sized> {
    fs: &'a F,
    sources: &'a L,
}

impl<'a, F: FileSystem, L: HolidaySourceLookup + ?Sized> GenerateUseCase<'a, F, L> {
    pub fn new(fs: &'a F, sources: &'a L) -> Self {
        Self { fs, sources }
    }

    pub fn execute(&self, options: &GenerateOptions) -> HoligenResult<GenerateResult> {
        let countries = options.registry.load(self.fs)?;
        info!(
            countries = countries.len(),
            floor = options.years.floor(),
            end = options.years.end(),
            "loaded country registry"
        );

        let aggregation = Aggregator::new(self.sources).aggregate(&countries, &options.years)?;

        let repo = CsvDatasetRepository::new(self.fs);
        let (bytes, dataset) = repo.prepare(&aggregation.dataset, &options.dataset)?;

        let features =
            FeaturePlan::prepare(self.fs, &options.fragment, &options.anchor, &countries)?;

        let written = !options.dry_run;
        if written {
            repo.commit(&bytes, &dataset)?;
            features.apply(self.fs)?;
        }

        Ok(GenerateResult {
            countries: countries.len(),
            resolved: aggregation.resolved,
            skipped: aggregation.skipped,
            duplicates: aggregation.duplicates,
            dataset,
            features,
            written,
        })
    }
}
