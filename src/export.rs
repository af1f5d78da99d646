use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::analyzer::Analyzer;
use crate::record::CompetitorRecord;

pub const FILENAME_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

fn keyword_slug(keyword: &str) -> String {
    keyword.replace(' ', "_")
}

pub fn default_json_filename(keyword: &str, now: NaiveDateTime) -> String {
    format!(
        "serp_analysis_{}_{}.json",
        keyword_slug(keyword),
        now.format(FILENAME_TIMESTAMP)
    )
}

pub fn default_csv_filename(keyword: &str, now: NaiveDateTime) -> String {
    format!(
        "serp_competitors_{}_{}.csv",
        keyword_slug(keyword),
        now.format(FILENAME_TIMESTAMP)
    )
}

/// Where an export goes: the explicit path, or a default name under `dir`.
pub fn resolve_path(explicit: Option<&Path>, dir: &Path, default_name: impl FnOnce() -> String) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => dir.join(default_name()),
    }
}

/// Writes the full analysis (or the no-data marker) as indented JSON.
pub fn export_json(analyzer: &Analyzer, path: &Path) -> Result<PathBuf> {
    let start_time = Instant::now();
    let analysis = analyzer.analyze();

    let mut body = serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
    body.push('\n');
    fs::write(path, body).with_context(|| format!("Failed to write JSON export to {:?}", path))?;

    info!(
        action = "export",
        component = "json_export",
        file_path = ?path,
        duration_ms = start_time.elapsed().as_millis(),
        "Exported analysis"
    );
    Ok(path.to_path_buf())
}

/// Writes the position-sorted records as CSV. An empty analyzer still gets
/// the header row.
pub fn export_csv(analyzer: &Analyzer, path: &Path) -> Result<PathBuf> {
    let records = analyzer.sorted_competitors();
    write_competitors_csv(&records, path)?;

    info!(
        action = "export",
        component = "csv_export",
        file_path = ?path,
        row_count = records.len(),
        "Exported competitors"
    );
    Ok(path.to_path_buf())
}

pub fn write_competitors_csv(records: &[CompetitorRecord], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV export at {:?}", path))?;

    writer.write_record(CompetitorRecord::FIELDS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV export to {:?}", path))?;
    Ok(())
}

pub fn read_competitors_csv(path: &Path) -> Result<Vec<CompetitorRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open competitor CSV {:?}", path))?;

    let records = reader
        .deserialize::<CompetitorRecord>()
        .enumerate()
        .map(|(row, result)| {
            result.with_context(|| format!("Invalid competitor row {} in {:?}", row + 2, path))
        })
        .collect::<Result<Vec<CompetitorRecord>>>()?;

    info!(
        action = "import",
        component = "csv_import",
        file_path = ?path,
        row_count = records.len(),
        "Loaded competitors from CSV"
    );
    Ok(records)
}

/// Current local time, for default export names.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
