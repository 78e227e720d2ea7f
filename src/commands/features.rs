use anyhow::Result;

use holigen::config::Config;
use holigen::presentation::cli::FeaturesArgs;
use holigen::presentation::output::FeaturesSummary;
use holigen::{FeaturesOptions, FeaturesUseCase, LocalFs};

use super::generate::registry_options;
use super::Output;

pub fn run(config: &Config, args: &FeaturesArgs, output: &Output) -> Result<bool> {
    let options = FeaturesOptions {
        registry: registry_options(config, args.registry.countries.as_ref()),
        fragment: args
            .registry
            .features
            .clone()
            .unwrap_or_else(|| config.paths.features.clone()),
        anchor: args
            .registry
            .anchor
            .clone()
            .unwrap_or_else(|| config.features.anchor.clone()),
        dry_run: args.registry.dry_run,
    };

    let fs = LocalFs::new();
    let result = FeaturesUseCase::new(&fs).execute(&options)?;

    output.emit("features", FeaturesSummary::from(&result), |r| r.features(&result));
    Ok(true)
}
