use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::models::{Apartment, StatsSnapshot};

/// Reads the persisted apartment list.
///
/// A missing or unreadable file means there is no prior data; the
/// run continues with an empty list so a first run or a wiped state
/// directory self-heals.
pub fn read_apartments(path: &Path) -> Vec<Apartment> {
    read_records(path)
}

/// Reads the statistics history, oldest snapshot first.
pub fn read_history(path: &Path) -> Vec<StatsSnapshot> {
    read_records(path)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            warn!("No prior data at {}: {err}", path.display());
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for row in reader.deserialize() {
        match row {
            Ok(record) => records.push(record),
            Err(err) => warn!("Skipping corrupt row in {}: {err}", path.display()),
        }
    }
    records
}

/// Rewrites the apartment list file in full, header included.
pub fn write_apartments(path: &Path, apartments: &[Apartment]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    for apartment in apartments {
        writer
            .serialize(apartment)
            .with_context(|| format!("Failed to write apartment {:?}", apartment.name))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

/// Appends one snapshot to the history file.
///
/// The header row is written exactly once, when the file is created
/// (or found empty); existing rows are never touched.
pub fn append_snapshot(path: &Path, snapshot: &StatsSnapshot) -> Result<()> {
    let needs_header = std::fs::metadata(path).map(|meta| meta.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for appending", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer
        .serialize(snapshot)
        .context("Failed to write the statistics snapshot")?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
