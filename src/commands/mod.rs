//! Command handlers for the holigen binary
//!
//! Each handler resolves its settings (CLI flag, then configuration), runs
//! the use case against the local file system, and prints the result.

mod features;
mod generate;
mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use holigen::config::{self, LoadedConfig};
use holigen::presentation::events::DataEvent;
use holigen::presentation::{Cli, Commands, OutputFormat, TextRenderer};

/// Where command output goes
pub struct Output {
    pub format: OutputFormat,
    pub renderer: TextRenderer,
}

impl Output {
    /// Print a JSON event line (ignored in text mode)
    pub fn event<T: Serialize>(&self, event: &T) {
        if self.format == OutputFormat::Json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!(error = %e, "failed to serialize event"),
            }
        }
    }

    /// Print a data event in JSON mode or the rendered text otherwise
    pub fn emit<T: Serialize>(
        &self,
        command: &str,
        data: T,
        text: impl FnOnce(&TextRenderer) -> String,
    ) {
        match self.format {
            OutputFormat::Json => self.event(&DataEvent::new(command, data)),
            OutputFormat::Text => print!("{}", text(&self.renderer)),
        }
    }
}

/// Run a command; `Ok(false)` means it ran but found a problem
pub fn run(cli: &Cli, command: &Commands, output: &Output) -> Result<bool> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let loaded = load_config(cli.config.as_deref(), &cwd)?;

    match command {
        Commands::Generate(args) => generate::run(&loaded.config, args, output),
        Commands::Features(args) => features::run(&loaded.config, args, output),
        Commands::Verify(args) => verify::run(&loaded.config, args, output),
    }
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let loaded = config::discover(explicit, cwd)?;
    match &loaded.source {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("using built-in configuration defaults"),
    }
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    Ok(loaded)
}
