//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_ANCHOR;
use crate::domain::value_objects::{DEFAULT_FLOOR_YEAR, DEFAULT_YEARS_AHEAD};
use crate::error::HoligenResult;
use crate::infrastructure::repositories::{DEFAULT_CODE_COLUMN, DEFAULT_NAME_COLUMN};

use super::loader::{self, ConfigWarning};

/// Input and output locations
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Country registry table
    #[serde(default = "default_countries_path")]
    pub countries: PathBuf,

    /// Knowledge-base directory of `<CODE>.csv` holiday tables
    #[serde(default = "default_sources_path")]
    pub sources: PathBuf,

    /// Generated dataset; the fingerprint sidecar sits next to it
    #[serde(default = "default_dataset_path")]
    pub dataset: PathBuf,

    /// Configuration fragment holding the feature entries
    #[serde(default = "default_features_path")]
    pub features: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            countries: default_countries_path(),
            sources: default_sources_path(),
            dataset: default_dataset_path(),
            features: default_features_path(),
        }
    }
}

fn default_countries_path() -> PathBuf {
    PathBuf::from("countries.csv")
}

fn default_sources_path() -> PathBuf {
    PathBuf::from("sources")
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("holidays.csv")
}

fn default_features_path() -> PathBuf {
    PathBuf::from("Cargo.toml")
}

/// Column names of the country registry table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_code_column")]
    pub code_column: String,

    #[serde(default = "default_name_column")]
    pub name_column: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            code_column: default_code_column(),
            name_column: default_name_column(),
        }
    }
}

fn default_code_column() -> String {
    DEFAULT_CODE_COLUMN.to_string()
}

fn default_name_column() -> String {
    DEFAULT_NAME_COLUMN.to_string()
}

/// Year range boundaries: `[floor, current year + ahead]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsConfig {
    #[serde(default = "default_floor")]
    pub floor: i32,

    #[serde(default = "default_ahead")]
    pub ahead: i32,
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            ahead: default_ahead(),
        }
    }
}

fn default_floor() -> i32 {
    DEFAULT_FLOOR_YEAR
}

fn default_ahead() -> i32 {
    DEFAULT_YEARS_AHEAD
}

/// Feature fragment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Key of the aggregate entry; its line is where regeneration starts
    #[serde(default = "default_anchor")]
    pub anchor: String,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
        }
    }
}

fn default_anchor() -> String {
    DEFAULT_ANCHOR.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub years: YearsConfig,

    #[serde(default)]
    pub features: FeaturesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HoligenResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> HoligenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
