//! Writers for the unformatted schedule. Amounts keep two fraction digits and
//! no grouping so spreadsheets can read them back as numbers.

use clap::ValueEnum;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::loan::Schedule;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Guesses the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// One CSV record per installment. The totals row is not written.
pub fn write_csv<W: Write>(schedule: &Schedule, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in schedule.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(schedule: &Schedule, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, schedule)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_schedule<W: Write>(schedule: &Schedule, writer: W, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(schedule, writer),
        ExportFormat::Json => write_json(schedule, writer),
    }
}

pub fn export_to_path(schedule: &Schedule, path: &Path, format: ExportFormat) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_schedule(schedule, &mut writer, format)?;
    writer.flush()?;
    info!("exported {} rows to {}", schedule.len(), path.display());
    Ok(())
}
