//! # Storage Layer
//!
//! Configuration loading and record files on disk.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Records | Markdown | `{directory}/{number}-{slug}.md` |
//! | Config | YAML | `~/.addr.yaml` or `--config <path>` |
//!
//! ## Key Types
//!
//! - [`Config`] - Resolved settings, built once per invocation
//! - [`RecordStore`] - Numbers, writes and lists record files

mod config;
mod records;

pub use config::{Config, ConfigError, ConfigFile, CONFIG_FILE_NAME};
pub use records::{RecordStore, RecordSummary};
