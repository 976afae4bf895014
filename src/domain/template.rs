//! Record templates
//!
//! Templates are plain markdown with `{{name}}` placeholders. The
//! recognized placeholders are `number`, `title`, `date` and `status`.

use std::fmt::Write;

use chrono::{DateTime, Local};
use thiserror::Error;

use super::record::Record;

/// The built-in record layout
pub const DEFAULT_TEMPLATE: &str = r#"# {{number}}. {{title}}
======
Date: {{date}}
## Status
======
{{status}}
## Context
======
## Decision
======
## Consequences
======
"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unknown placeholder '{{{{{name}}}}}' at byte {offset}")]
    UnknownPlaceholder { name: String, offset: usize },

    #[error("Unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("Invalid date format: {0}")]
    DateFormat(String),
}

/// A record template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Template {
    /// Creates a template from its source text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the raw template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders a record, formatting its date with a chrono strftime string
    pub fn render(&self, record: &Record, date_format: &str) -> Result<String, RenderError> {
        let date = format_date(&record.date, date_format)?;

        let mut out = String::with_capacity(self.source.len() + record.title.len());
        let mut rest = self.source.as_str();
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);

            let inner = &rest[start + 2..];
            let end = inner.find("}}").ok_or(RenderError::Unterminated {
                offset: offset + start,
            })?;

            match inner[..end].trim() {
                "number" => out.push_str(&record.number.to_string()),
                "title" => out.push_str(&record.title),
                "date" => out.push_str(&date),
                "status" => out.push_str(&record.status.to_string()),
                other => {
                    return Err(RenderError::UnknownPlaceholder {
                        name: other.to_string(),
                        offset: offset + start,
                    })
                }
            }

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Formats a date, reporting bad format strings instead of panicking
fn format_date(date: &DateTime<Local>, format: &str) -> Result<String, RenderError> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| RenderError::DateFormat(format.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> Record {
        let date = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        Record::with_date(1, "use postgres", date).unwrap()
    }

    #[test]
    fn renders_default_template() {
        let out = Template::default()
            .render(&record(), "%Y-%m-%d %H:%M:%S")
            .unwrap();

        assert!(out.starts_with("# 1. use postgres\n"));
        assert!(out.contains("Date: 2024-03-09 14:05:00\n"));
        assert!(out.contains("## Status\n======\nProposed\n"));
    }

    #[test]
    fn sections_appear_once() {
        let out = Template::default().render(&record(), "%Y").unwrap();

        for section in ["Status", "Context", "Decision", "Consequences"] {
            let header = format!("## {}", section);
            let count = out.lines().filter(|line| *line == header).count();
            assert_eq!(count, 1, "section {} should appear once", section);
        }
    }

    #[test]
    fn placeholder_whitespace_is_ignored() {
        let template = Template::new("{{ number }}:{{title }}");
        assert_eq!(template.render(&record(), "%Y").unwrap(), "1:use postgres");
    }

    #[test]
    fn title_is_not_escaped() {
        let date = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let record = Record::with_date(3, "cache <html> & json", date).unwrap();
        let out = Template::new("{{title}}").render(&record, "%Y").unwrap();
        assert_eq!(out, "cache <html> & json");
    }

    #[test]
    fn unknown_placeholder_is_error() {
        let err = Template::new("abc {{author}}")
            .render(&record(), "%Y")
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownPlaceholder {
                name: "author".to_string(),
                offset: 4
            }
        );
    }

    #[test]
    fn unterminated_placeholder_is_error() {
        let err = Template::new("{{number}} {{title")
            .render(&record(), "%Y")
            .unwrap_err();
        assert_eq!(err, RenderError::Unterminated { offset: 11 });
    }

    #[test]
    fn bad_date_format_is_error() {
        let err = Template::default().render(&record(), "%Q").unwrap_err();
        assert!(matches!(err, RenderError::DateFormat(_)));
    }

    #[test]
    fn template_without_placeholders() {
        let template = Template::new("plain text\n");
        assert_eq!(template.render(&record(), "%Y").unwrap(), "plain text\n");
    }
}
