//! holigen - deterministic public-holiday dataset generator
//!
//! Reads a country registry, collects the holidays of every country over a
//! year range, and writes a canonically ordered CSV dataset with a SHA-256
//! fingerprint sidecar. It also regenerates the per-country feature entries
//! of a TOML configuration fragment.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;

// Re-exports for convenience
pub use application::{
    FeaturesOptions, FeaturesUseCase, GenerateOptions, GenerateUseCase, RegistryOptions,
    VerifyOptions, VerifyUseCase,
};
pub use config::Config;
pub use domain::entities::{Country, Dataset, FeatureList, HolidayFact};
pub use domain::value_objects::{Fingerprint, YearRange};
pub use error::{HoligenError, HoligenResult};
pub use infrastructure::{LocalFs, SourceRegistry};
