//! Domain models for addr
//!
//! Contains the record model and template rendering without any I/O concerns.

mod record;
mod template;

pub use record::{slugify, Record, RecordError, RecordStatus};
pub use template::{RenderError, Template, DEFAULT_TEMPLATE};
