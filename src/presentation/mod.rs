//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `output` - text summaries and JSON payloads
//! - `events` - JSON event envelopes

pub mod cli;
pub mod events;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{Icons, OutputFormat, TextRenderer};
