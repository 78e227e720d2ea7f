use anyhow::Result;
use chrono::Datelike;

use holigen::config::Config;
use holigen::presentation::cli::GenerateArgs;
use holigen::presentation::output::GenerateSummary;
use holigen::{GenerateOptions, GenerateUseCase, LocalFs, RegistryOptions, SourceRegistry, YearRange};

use super::Output;

pub fn run(config: &Config, args: &GenerateArgs, output: &Output) -> Result<bool> {
    let floor = args.floor_year.unwrap_or(config.years.floor);
    let ahead = args.years_ahead.unwrap_or(config.years.ahead);
    let years = YearRange::relative_to(chrono::Local::now().year(), floor, ahead)?;

    let sources_dir = args.sources.as_ref().unwrap_or(&config.paths.sources);
    let sources = SourceRegistry::from_directory(sources_dir)?;

    let options = GenerateOptions {
        registry: registry_options(config, args.registry.countries.as_ref()),
        dataset: args
            .dataset
            .clone()
            .unwrap_or_else(|| config.paths.dataset.clone()),
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
        years,
        dry_run: args.registry.dry_run,
    };

    let fs = LocalFs::new();
    let result = GenerateUseCase::new(&fs, &sources).execute(&options)?;

    output.emit("generate", GenerateSummary::from(&result), |r| r.generate(&result));
    Ok(true)
}

/// Registry location and columns, CLI path first
pub(super) fn registry_options(
    config: &Config,
    countries: Option<&std::path::PathBuf>,
) -> RegistryOptions {
    RegistryOptions::new(countries.unwrap_or(&config.paths.countries).clone())
        .with_columns(&config.registry.code_column, &config.registry.name_column)
}
