//! Record CLI commands

use std::fs;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{Record, Template};
use crate::storage::{Config, RecordStore};

/// Creates the next record and writes it to the configured directory
pub fn new_record(output: &Output, config: &Config, title: &str, number: Option<u32>) -> Result<()> {
    let store = RecordStore::new(&config.directory);

    let number = match number {
        Some(n) => n,
        None => store.next_number().with_context(|| {
            format!("Failed to scan record directory: {}", store.dir().display())
        })?,
    };
    output.verbose_ctx("new", &format!("Using record number {}", number));

    let template = load_template(output, config)?;
    let record = Record::new(number, title)?;

    let path = store
        .write(&record, &template, &config.date_format, config.number_width)
        .context("Failed to create record")?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "number": record.number,
            "title": record.title,
            "status": record.status,
            "date": record.date.to_rfc3339(),
            "path": path.display().to_string(),
        }));
    } else {
        output.success(&format!("Created record {}", path.display()));
    }

    Ok(())
}

/// Lists records found in the configured directory
pub fn list_records(output: &Output, config: &Config) -> Result<()> {
    let store = RecordStore::new(&config.directory);
    let records = store
        .list()
        .with_context(|| format!("Failed to list records in {}", store.dir().display()))?;
    output.verbose_ctx("list", &format!("Found {} records", records.len()));

    if output.is_json() {
        output.data(&records);
    } else if records.is_empty() {
        println!("No records in {}", store.dir().display());
    } else {
        println!("{:<6} {:<12} TITLE", "NUM", "STATUS");
        println!("{}", "-".repeat(60));
        for record in &records {
            let status = record
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("{:<6} {:<12} {}", record.number, status, record.title);
        }
    }

    Ok(())
}

/// Prints the resolved configuration
pub fn show_config(output: &Output, config: &Config) {
    if output.is_json() {
        output.data(config);
        return;
    }

    let source = config
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    let template = config
        .template
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string());

    println!("source:       {}", source);
    println!("directory:    {}", config.directory.display());
    println!("number_width: {}", config.number_width);
    println!("date_format:  {}", config.date_format);
    println!("template:     {}", template);
}

fn load_template(output: &Output, config: &Config) -> Result<Template> {
    match &config.template {
        Some(path) => {
            output.verbose_ctx("new", &format!("Loading template: {}", path.display()));
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            Ok(Template::new(source))
        }
        None => Ok(Template::default()),
    }
}
