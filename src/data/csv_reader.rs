//! Plain delimited-file reading
//!
//! Splits a text file into newline-terminated rows and comma-separated
//! fields. Purely syntactic: no quoting, no escaping, no trimming, no
//! field-count checks. A source ending in a line terminator yields a final
//! row holding a single empty field, which propagates downstream.

use crate::data::RowSource;
use crate::Result;
use std::path::PathBuf;

/// Reads a whole delimited file into rows of raw string fields
pub struct CsvFileReader {
    path: PathBuf,
}

impl CsvFileReader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvFileReader { path: path.into() }
    }
}

impl RowSource for CsvFileReader {
    fn read(&self) -> Result<Vec<Vec<String>>> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents
            .split('\n')
            .map(|row| row.split(',').map(str::to_string).collect())
            .collect())
    }
}
