//! holigen CLI - deterministic holiday dataset generator
//!
//! Usage: holigen [COMMAND]
//!
//! Commands:
//!   generate  Regenerate dataset, fingerprint and feature fragment (default)
//!   features  Rewrite only the feature fragment
//!   verify    Check the dataset against its recorded fingerprint

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use holigen::presentation::events::{CompleteEvent, ErrorEvent, StartEvent};
use holigen::presentation::{Cli, Icons, OutputFormat, TextRenderer};
use holigen::telemetry::{init_tracing, level_for_verbosity};
use holigen::HoligenError;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json, level_for_verbosity(cli.verbose));

    let command = cli.effective_command();
    let name = command.name();
    let output = commands::Output {
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        renderer: TextRenderer::new(Icons::detect(), cli.verbose),
    };

    let started = Instant::now();
    output.event(&StartEvent::new(name));

    match commands::run(&cli, &command, &output) {
        Ok(success) => {
            let elapsed = started.elapsed().as_millis() as u64;
            let event = if success {
                CompleteEvent::success(name)
            } else {
                CompleteEvent::failure(name)
            };
            output.event(&event.with_duration(elapsed));
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            report_error(&output, name, &err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(output: &commands::Output, command: &str, err: &anyhow::Error) {
    let holigen = err.downcast_ref::<HoligenError>();
    match output.format {
        OutputFormat::Json => {
            let code = holigen.map(HoligenError::code).unwrap_or("ERROR");
            let mut event = ErrorEvent::new(command, code, format!("{:#}", err));
            if let Some(help) = holigen.and_then(HoligenError::help) {
                event = event.with_help(help);
            }
            output.event(&event);
        }
        OutputFormat::Text => {
            eprintln!("[ERROR] {:#}", err);
            if let Some(help) = holigen.and_then(HoligenError::help) {
                eprintln!("  help: {}", help);
            }
        }
    }
}
