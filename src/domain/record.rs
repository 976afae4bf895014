//! Record domain model
//!
//! A record is one architecture decision. It lives in memory only for the
//! duration of a command: it is built, rendered and written out as a
//! markdown file named `<number>-<slug>.md`.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::template::RenderError;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record title must not be empty")]
    EmptyTitle,

    #[error("Record number must be positive, got {0}")]
    InvalidNumber(u32),

    #[error("Failed to render record: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Status of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Initial state for every new record
    #[default]
    Proposed,

    /// The decision was agreed on
    Accepted,

    /// No longer relevant
    Deprecated,

    /// Replaced by a later record
    Superseded,
}

impl RecordStatus {
    /// Returns all valid status values
    pub fn all() -> &'static [RecordStatus] {
        &[
            RecordStatus::Proposed,
            RecordStatus::Accepted,
            RecordStatus::Deprecated,
            RecordStatus::Superseded,
        ]
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Proposed => write!(f, "Proposed"),
            RecordStatus::Accepted => write!(f, "Accepted"),
            RecordStatus::Deprecated => write!(f, "Deprecated"),
            RecordStatus::Superseded => write!(f, "Superseded"),
        }
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proposed" => Ok(RecordStatus::Proposed),
            "accepted" => Ok(RecordStatus::Accepted),
            "deprecated" => Ok(RecordStatus::Deprecated),
            "superseded" => Ok(RecordStatus::Superseded),
            _ => Err(format!("Unknown record status: {}", s)),
        }
    }
}

/// An architecture decision record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Sequential number within the record directory
    pub number: u32,

    /// Human-readable title
    pub title: String,

    /// When the record was created
    pub date: DateTime<Local>,

    /// Current status
    pub status: RecordStatus,
}

impl Record {
    /// Creates a new proposed record dated now
    pub fn new(number: u32, title: &str) -> Result<Self, RecordError> {
        Self::with_date(number, title, Local::now())
    }

    /// Creates a new proposed record with an explicit date
    pub fn with_date(number: u32, title: &str, date: DateTime<Local>) -> Result<Self, RecordError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RecordError::EmptyTitle);
        }
        if number == 0 {
            return Err(RecordError::InvalidNumber(number));
        }

        Ok(Self {
            number,
            title: title.to_string(),
            date,
            status: RecordStatus::Proposed,
        })
    }

    /// Returns the filesystem-safe form of the title
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Returns the file name, zero-padding the number to `width` digits
    pub fn file_name(&self, width: usize) -> String {
        format!("{:0width$}-{}.md", self.number, self.slug(), width = width)
    }
}

/// Collapses each whitespace run into a single hyphen and trims the ends.
///
/// Path separators are replaced as well so the result is always a plain
/// file name.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| word.replace(['/', '\\'], "-"))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_record_is_proposed() {
        let record = Record::new(1, "use postgres").unwrap();
        assert_eq!(record.status, RecordStatus::Proposed);
        assert_eq!(record.title, "use postgres");
    }

    #[test]
    fn file_name_from_title() {
        let record = Record::new(1, "use postgres").unwrap();
        assert_eq!(record.file_name(0), "1-use-postgres.md");
    }

    #[test]
    fn file_name_padded() {
        let record = Record::new(7, "Pick a queue").unwrap();
        assert_eq!(record.file_name(4), "0007-Pick-a-queue.md");
    }

    #[test]
    fn title_is_trimmed() {
        let record = Record::new(2, "  \tlog in json\n").unwrap();
        assert_eq!(record.title, "log in json");
        assert_eq!(record.file_name(0), "2-log-in-json.md");
    }

    #[test]
    fn empty_title_rejected() {
        assert!(matches!(Record::new(1, ""), Err(RecordError::EmptyTitle)));
        assert!(matches!(Record::new(1, " \t "), Err(RecordError::EmptyTitle)));
    }

    #[test]
    fn zero_number_rejected() {
        assert!(matches!(
            Record::new(0, "anything"),
            Err(RecordError::InvalidNumber(0))
        ));
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("a   b\t\tc"), "a-b-c");
    }

    #[test]
    fn slug_replaces_path_separators() {
        assert_eq!(slugify("client/server split"), "client-server-split");
        assert_eq!(slugify(r"back\slash"), "back-slash");
    }

    #[test]
    fn status_display_and_parse() {
        for status in RecordStatus::all() {
            let parsed: RecordStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, *status);
        }
        assert_eq!("ACCEPTED".parse::<RecordStatus>(), Ok(RecordStatus::Accepted));
        assert!("rejected".parse::<RecordStatus>().is_err());
    }

    proptest! {
        #[test]
        fn file_name_matches_whitespace_rule(
            number in 1u32..10_000,
            title in "[ \t]{0,3}[a-z0-9]{1,8}([ \t\n]{1,4}[a-z0-9]{1,8}){0,5}[ \t]{0,3}",
        ) {
            let record = Record::new(number, &title).unwrap();
            let expected = format!(
                "{}-{}.md",
                number,
                title.split_whitespace().collect::<Vec<_>>().join("-")
            );
            prop_assert_eq!(record.file_name(0), expected);
            prop_assert_eq!(record.status, RecordStatus::Proposed);
        }
    }
}
