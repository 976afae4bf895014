//! addr - A small CLI for architecture decision records
//!
//! Each record is a markdown file rendered from a template and numbered
//! sequentially within its directory. Settings come from a YAML file
//! (`~/.addr.yaml` by default) with environment overrides.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Record, RecordStatus, Template};
pub use storage::{Config, RecordStore};
