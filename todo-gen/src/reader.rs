use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use log::warn;

use crate::error::GenError;
use crate::todo::{TodoRecord, HEADER};

/// Reads back a file produced by [`crate::writer::write_todos`].
///
/// # Errors
/// Errors when the file cannot be opened or any row is malformed.
pub fn read_todos(path: impl AsRef<Path>) -> Result<Vec<TodoRecord>, GenError> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}

/// Parses todo rows, skipping the header row.
///
/// # Errors
/// Errors on the first row that does not have exactly five columns or whose
/// fields do not parse (a bad uuid, a `completed` that is not `true`/`false`).
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<TodoRecord>, GenError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut todos = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != HEADER.len() {
            let line = record.position().map_or(0, csv::Position::line);
            warn!("Rejected row on line {line} with {} columns", record.len());
            return Err(GenError::InvalidRecord {
                line,
                columns: record.len(),
            });
        }
        todos.push(record.deserialize(Some(&headers))?);
    }

    Ok(todos)
}
