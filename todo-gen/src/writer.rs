use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use csv::WriterBuilder;
use log::debug;

use crate::error::GenError;
use crate::todo::{TodoRecord, HEADER};

pub const DEFAULT_OUTPUT_DIR: &str = "../resources/files";

/// `todos-YYYYMMDD-HHMMSS` for the given instant.
#[must_use]
pub fn output_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("todos-{}", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Writes the header row followed by one row per record, in order.
///
/// # Errors
/// Errors when the underlying writer fails.
pub fn write_records<W: io::Write>(writer: W, records: &[TodoRecord]) -> Result<(), GenError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes `records` to a new timestamped file inside `dir` and returns its path.
/// A file with the same name is truncated.
///
/// # Errors
/// Errors when `dir` does not exist or is not writable. A failure part way
/// through leaves the partially written file behind.
pub fn write_todos(dir: impl AsRef<Path>, records: &[TodoRecord]) -> Result<PathBuf, GenError> {
    let path = dir.as_ref().join(output_file_name(&Local::now()));
    let file = File::create(&path)?;
    write_records(file, records)?;
    debug!("Wrote {} todos to {}", records.len(), path.display());

    Ok(path)
}
