//! Match statistics
//!
//! Each statistic implements [`Analyzer`]: a pure pass over the loaded
//! match records producing a one-line report message.

mod win_analysis;

pub use win_analysis::WinAnalysis;

use crate::MatchRecord;

/// A statistic computed over the full match sequence
pub trait Analyzer {
    fn run(&self, matches: &[MatchRecord]) -> String;
}
