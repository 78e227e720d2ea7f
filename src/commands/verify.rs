use anyhow::Result;

use holigen::config::Config;
use holigen::presentation::cli::VerifyArgs;
use holigen::presentation::output::VerifySummary;
use holigen::{LocalFs, VerifyOptions, VerifyUseCase};

use super::Output;

/// `Ok(false)` when the dataset has drifted from its fingerprint
pub fn run(config: &Config, args: &VerifyArgs, output: &Output) -> Result<bool> {
    let options = VerifyOptions {
        dataset: args
            .dataset
            .clone()
            .unwrap_or_else(|| config.paths.dataset.clone()),
    };

    let fs = LocalFs::new();
    let verification = VerifyUseCase::new(&fs).execute(&options)?;

    output.emit("verify", VerifySummary::from(&verification), |r| r.verify(&verification));
    Ok(verification.is_match())
}
