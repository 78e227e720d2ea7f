//! Verify Use Case
//!
//! Recomputes the fingerprint of an existing dataset and compares it with
//! the recorded sidecar.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;
use crate::error::HoligenResult;
use crate::infrastructure::repositories::{CsvDatasetRepository, Recorded, Verification};

/// Options for the verify use case
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub dataset: PathBuf,
}

/// Verify use case
pub struct VerifyUseCase<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> VerifyUseCase<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    pub fn execute(&self, options: &VerifyOptions) -> HoligenResult<Verification> {
        let verification = CsvDatasetRepository::new(self.fs).verify(&options.dataset)?;
        let path = options.dataset.display();
        match &verification.recorded {
            Recorded::Valid(recorded) if verification.is_match() => {
                debug!(path = %path, fingerprint = %recorded, "dataset verified");
            }
            Recorded::Valid(recorded) => warn!(
                path = %path,
                recorded = %recorded,
                computed = %verification.computed,
                "dataset fingerprint mismatch"
            ),
            Recorded::Malformed(content) => {
                warn!(path = %path, content = %content, "fingerprint sidecar is malformed")
            }
            Recorded::Missing => warn!(path = %path, "no fingerprint recorded"),
        }
        Ok(verification)
    }
}
