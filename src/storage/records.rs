//! Record files on disk
//!
//! Records are markdown files named `<number>-<slug>.md` inside a single
//! directory. The number prefix is the only index: the next record number
//! is one past the highest prefix found.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{Record, RecordError, RecordStatus, Template};

/// What can be recovered from an existing record file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub number: u32,
    pub file_name: String,
    pub title: String,
    pub status: Option<RecordStatus>,
}

/// Store for record files in one directory
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Creates a store for the given directory (it need not exist yet)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the record directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the number the next record should get
    pub fn next_number(&self) -> Result<u32, RecordError> {
        let highest = self
            .numbered_files()?
            .into_iter()
            .map(|(number, _)| number)
            .max()
            .unwrap_or(0);

        Ok(highest.saturating_add(1))
    }

    /// Renders a record and writes it, replacing any file of the same name
    ///
    /// Missing parent directories are created first. Returns the path
    /// written.
    pub fn write(
        &self,
        record: &Record,
        template: &Template,
        date_format: &str,
        number_width: usize,
    ) -> Result<PathBuf, RecordError> {
        let content = template.render(record, date_format)?;
        let path = self.dir.join(record.file_name(number_width));

        fs::create_dir_all(&self.dir).map_err(|source| RecordError::Io {
            path: self.dir.clone(),
            source,
        })?;

        fs::write(&path, content).map_err(|source| RecordError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Lists all records, sorted by number
    pub fn list(&self) -> Result<Vec<RecordSummary>, RecordError> {
        let mut summaries = Vec::new();

        for (number, path) in self.numbered_files()? {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let content = fs::read_to_string(&path).map_err(|source| RecordError::Io {
                path: path.clone(),
                source,
            })?;

            let title = parse_title(&content, number)
                .unwrap_or_else(|| slug_from_file_name(&file_name).replace('-', " "));

            summaries.push(RecordSummary {
                number,
                file_name,
                title,
                status: parse_status(&content),
            });
        }

        summaries.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.file_name.cmp(&b.file_name)));
        Ok(summaries)
    }

    /// Collects `(number, path)` for every `<digits>-*.md` file
    fn numbered_files(&self) -> Result<Vec<(u32, PathBuf)>, RecordError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(RecordError::Io {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(number) = parse_number(name) {
                files.push((number, path));
            }
        }

        Ok(files)
    }
}

/// Extracts the number prefix from `<digits>-<anything>.md`
fn parse_number(file_name: &str) -> Option<u32> {
    let stem = file_name.strip_suffix(".md")?;
    let (digits, _) = stem.split_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn slug_from_file_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(".md")
        .and_then(|stem| stem.split_once('-'))
        .map(|(_, slug)| slug)
        .unwrap_or(file_name)
}

/// Reads the title from a `# <number>. <title>` heading
fn parse_title(content: &str, number: u32) -> Option<String> {
    let prefix = format!("# {}. ", number);
    content
        .lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Reads the status from the first content line under `## Status`
fn parse_status(content: &str) -> Option<RecordStatus> {
    let mut lines = content.lines().skip_while(|line| line.trim() != "## Status");
    lines.next()?;

    lines
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.chars().all(|c| c == '='))
        .and_then(|line| line.parse().ok())
}
