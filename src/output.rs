use crate::models::{PropertyRecord, CSV_HEADER};
use anyhow::{Context, Result};
use std::path::Path;

/// Write the header and one row per record, replacing any existing file
pub fn write_csv(path: &Path, records: &[PropertyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(record.to_csv_record())?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}
