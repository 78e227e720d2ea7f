//! Configuration loading

use std::path::{Path, PathBuf};

use crate::error::{HoligenError, HoligenResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "holigen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HoligenResult<(Config, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path).map_err(|source| HoligenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HoligenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.features.anchor.trim().is_empty() {
        return Err(HoligenError::InvalidConfig {
            file: path.to_path_buf(),
            message: "features.anchor must not be blank".to_string(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the configuration
///
/// Lookup order: the explicit path (must exist), `holigen.toml` in `cwd`,
/// the user config file, built-in defaults. Environment overrides are
/// applied on top in every case.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> HoligenResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let mut loaded = LoadedConfig::default();
    if let Some(path) = candidate {
        let (config, warnings) = load_with_warnings(&path)?;
        loaded = LoadedConfig {
            config,
            warnings,
            source: Some(path),
        };
    }

    loaded.config = with_env_overrides(loaded.config)?;
    Ok(loaded)
}

/// `<user config dir>/holigen/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("holigen").join("config.toml"))
}

/// Apply environment variable overrides (HOLIGEN_* prefix)
pub fn with_env_overrides(config: Config) -> HoligenResult<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup
pub fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> HoligenResult<Config> {
    // HOLIGEN_FLOOR_YEAR
    if let Some(value) = lookup("HOLIGEN_FLOOR_YEAR") {
        config.years.floor = parse_year_override("HOLIGEN_FLOOR_YEAR", &value)?;
    }

    // HOLIGEN_YEARS_AHEAD
    if let Some(value) = lookup("HOLIGEN_YEARS_AHEAD") {
        config.years.ahead = parse_year_override("HOLIGEN_YEARS_AHEAD", &value)?;
    }

    // HOLIGEN_ANCHOR
    if let Some(value) = lookup("HOLIGEN_ANCHOR") {
        let value = value.trim();
        if !value.is_empty() {
            config.features.anchor = value.to_string();
        }
    }

    Ok(config)
}

fn parse_year_override(key: &str, value: &str) -> HoligenResult<i32> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| HoligenError::InvalidConfig {
            file: PathBuf::from(format!("${}", key)),
            message: format!("'{}' is not a year: {}", value, e),
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "countries",
        "sources",
        "dataset",
        "features",
        "registry",
        "code_column",
        "name_column",
        "years",
        "floor",
        "ahead",
        "anchor",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
