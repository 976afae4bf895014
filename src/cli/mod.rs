//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `new <title...>` | Create the next numbered record |
//! | `list` | List records in the configured directory |
//! | `config` | Show the resolved configuration |
//!
//! ## Global Flags
//!
//! - `--config <path>` (or `ADDR_CONFIG`) - use this config file instead of `~/.addr.yaml`
//! - `--format text|json` - output format
//! - `--verbose` / `-v` - debug output on stderr
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod record_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
