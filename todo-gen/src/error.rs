use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Record on line {line} has {columns} columns, expected 5")]
    InvalidRecord { line: u64, columns: usize },
}
