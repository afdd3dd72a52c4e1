//! Match data loading
//!
//! Raw delimited-text access and conversion into typed match records.

mod csv_reader;
mod match_reader;

pub use csv_reader::CsvFileReader;
pub use match_reader::MatchReader;

use crate::Result;

/// Source of untyped tabular rows
pub trait RowSource {
    /// Produce every row of the source as raw string fields, in order
    fn read(&self) -> Result<Vec<Vec<String>>>;
}
