//! Configuration module for holigen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HOLIGEN_*)
//! 3. Project config (./holigen.toml) or `--config PATH`
//! 4. User config (<config dir>/holigen/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, discover, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, FeaturesConfig, PathsConfig, RegistryConfig, YearsConfig};
