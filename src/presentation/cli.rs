//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--config`) are inherited by all
//! subcommands. Running without a subcommand is the same as `generate`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// holigen - deterministic holiday dataset generator
#[derive(Parser, Debug)]
#[command(name = "holigen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./holigen.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run, `generate` with defaults when none was given
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Generate(GenerateArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate the dataset, its fingerprint and the feature fragment
    Generate(GenerateArgs),

    /// Rewrite only the feature fragment from the country registry
    Features(FeaturesArgs),

    /// Check the dataset against its recorded fingerprint (exits non-zero on drift)
    Verify(VerifyArgs),
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate(_) => "generate",
            Commands::Features(_) => "features",
            Commands::Verify(_) => "verify",
        }
    }
}

/// Registry and fragment flags shared by `generate` and `features`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryArgs {
    /// Country registry CSV
    #[arg(long, value_name = "PATH")]
    pub countries: Option<PathBuf>,

    /// Configuration fragment holding the feature entries
    #[arg(long, value_name = "PATH")]
    pub features: Option<PathBuf>,

    /// Key of the aggregate feature entry
    #[arg(long, value_parser = parse_anchor)]
    pub anchor: Option<String>,

    /// Dry run - show what would be done
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Directory of per-country holiday tables (`<CODE>.csv`)
    #[arg(long, value_name = "DIR")]
    pub sources: Option<PathBuf>,

    /// Dataset CSV to write; the fingerprint goes next to it
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// First year to include
    #[arg(long, value_name = "YEAR", allow_negative_numbers = true)]
    pub floor_year: Option<i32>,

    /// Years after the current one to include
    #[arg(long, value_name = "N")]
    pub years_ahead: Option<i32>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyArgs {
    /// Dataset CSV to check
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,
}

fn parse_anchor(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("anchor must not be blank".to_string());
    }
    Ok(value.to_string())
}
