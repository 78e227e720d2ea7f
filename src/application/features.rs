//! Features Use Case
//!
//! Rewrites the configuration fragment from the country registry:
//! load registry → derive feature list → synthesize fragment → write.

use std::path::{Path, PathBuf};

use similar::TextDiff;
use tracing::info;

use crate::domain::entities::{Country, FeatureList};
use crate::domain::ports::FileSystem;
use crate::domain::services::FeatureSynthesizer;
use crate::error::{HoligenError, HoligenResult};

use super::RegistryOptions;

/// Options for the features use case
#[derive(Debug, Clone)]
pub struct FeaturesOptions {
    pub registry: RegistryOptions,
    /// Fragment to rewrite
    pub fragment: PathBuf,
    /// Aggregate entry key
    pub anchor: String,
    /// Compute the new fragment without writing it
    pub dry_run: bool,
}

/// A computed fragment rewrite, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePlan {
    pub path: PathBuf,
    pub before: String,
    pub after: String,
    pub codes: Vec<String>,
}

impl FeaturePlan {
    /// Read the fragment and compute its rewrite
    ///
    /// Fails with `AnchorNotFound` without touching anything when the
    /// fragment has no anchor line, and with `InvalidAnchor` when the
    /// anchor is blank.
    pub fn prepare<F: FileSystem>(
        fs: &F,
        path: &Path,
        anchor: &str,
        countries: &[Country],
    ) -> HoligenResult<Self> {
        if anchor.trim().is_empty() {
            return Err(HoligenError::InvalidAnchor {
                anchor: anchor.to_string(),
            });
        }
        let before = fs.read_to_string(path)?;
        let features = FeatureList::from_countries(countries);
        let after = FeatureSynthesizer::new(anchor)
            .synthesize(&before, &features)
            .ok_or_else(|| HoligenError::AnchorNotFound {
                anchor: anchor.to_string(),
                path: path.to_path_buf(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            before,
            after,
            codes: features.codes().to_vec(),
        })
    }

    pub fn is_changed(&self) -> bool {
        self.before != self.after
    }

    /// Unified diff of the rewrite, empty when unchanged
    pub fn diff(&self) -> String {
        if !self.is_changed() {
            return String::new();
        }
        let name = self.path.display().to_string();
        TextDiff::from_lines(&self.before, &self.after)
            .unified_diff()
            .context_radius(2)
            .header(&name, &name)
            .to_string()
    }

    /// Write the new fragment
    pub fn apply<F: FileSystem>(&self, fs: &F) -> HoligenResult<()> {
        fs.write_atomic(&self.path, self.after.as_bytes())?;
        info!(path = %self.path.display(), features = self.codes.len(), "updated features");
        Ok(())
    }
}

/// Result of the features use case
#[derive(Debug, Clone)]
pub struct FeaturesResult {
    pub plan: FeaturePlan,
    pub written: bool,
}

/// Features use case
pub struct FeaturesUseCase<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> FeaturesUseCase<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    pub fn execute(&self, options: &FeaturesOptions) -> HoligenResult<FeaturesResult> {
        let countries = options.registry.load(self.fs)?;
        let plan = FeaturePlan::prepare(self.fs, &options.fragment, &options.anchor, &countries)?;

        let written = !options.dry_run;
        if written {
            plan.apply(self.fs)?;
        }

        Ok(FeaturesResult { plan, written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MockFileSystem;

    const REGISTRY: &str = "ISO 3166-1 A2,Name\nBB,Seaville\nAA,Landia\nbb,Seaville again\n";
    const FRAGMENT: &str = "[package]\nname = \"h\"\n\n[features]\nall-countries = []\n";

    fn options(dry_run: bool) -> FeaturesOptions {
        FeaturesOptions {
            registry: RegistryOptions::new("countries.csv"),
            fragment: PathBuf::from("Cargo.toml"),
            anchor: "all-countries".to_string(),
            dry_run,
        }
    }

    fn fs() -> MockFileSystem {
        MockFileSystem::new()
            .with_file("countries.csv", REGISTRY)
            .with_file("Cargo.toml", FRAGMENT)
    }

    #[test]
    fn rewrites_fragment_with_deduplicated_codes() {
        let fs = fs();
        let result = FeaturesUseCase::new(&fs).execute(&options(false)).unwrap();

        assert!(result.written);
        assert_eq!(result.plan.codes, vec!["AA", "BB"]);
        let written = fs.get_string(Path::new("Cargo.toml")).unwrap();
        assert!(written.starts_with("[package]\nname = \"h\"\n\n[features]\nall-countries = [\n"));
        assert!(written.ends_with("AA = []\nBB = []\n"));
    }

    #[test]
    fn dry_run_leaves_fragment_untouched() {
        let fs = fs();
        let result = FeaturesUseCase::new(&fs).execute(&options(true)).unwrap();

        assert!(!result.written);
        assert!(result.plan.is_changed());
        assert_eq!(fs.get_string(Path::new("Cargo.toml")).unwrap(), FRAGMENT);
        assert!(result.plan.diff().contains("+AA = []"));
    }

    #[test]
    fn missing_anchor_is_fatal() {
        let fs = fs().with_file("Cargo.toml", "[features]\ndefault = []\n");
        let err = FeaturesUseCase::new(&fs).execute(&options(false)).unwrap_err();
        assert!(matches!(err, HoligenError::AnchorNotFound { .. }));
    }

    #[test]
    fn blank_anchor_is_rejected() {
        let fs = fs();
        for anchor in ["", "  \t"] {
            let mut options = options(false);
            options.anchor = anchor.to_string();
            let err = FeaturesUseCase::new(&fs).execute(&options).unwrap_err();
            assert!(matches!(err, HoligenError::InvalidAnchor { .. }));
        }
        assert_eq!(fs.get_string(Path::new("Cargo.toml")).unwrap(), FRAGMENT);
    }

    #[test]
    fn missing_fragment_is_fatal() {
        let fs = MockFileSystem::new().with_file("countries.csv", REGISTRY);
        let err = FeaturesUseCase::new(&fs).execute(&options(false)).unwrap_err();
        assert!(matches!(err, HoligenError::Read { .. }));
    }

    #[test]
    fn second_run_is_unchanged() {
        let fs = fs();
        FeaturesUseCase::new(&fs).execute(&options(false)).unwrap();
        let again = FeaturesUseCase::new(&fs).execute(&options(true)).unwrap();
        assert!(!again.plan.is_changed());
        assert!(again.plan.diff().is_empty());
    }
}
