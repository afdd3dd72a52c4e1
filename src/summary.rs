//! Pairing of one analysis with one output target
//!
//! The orchestration runs each pairing without knowing which concrete
//! analyzer or target it holds.

use crate::analysis::{Analyzer, WinAnalysis};
use crate::report::{ConsoleReport, HtmlReport, OutputTarget};
use crate::{MatchRecord, Result};
use std::path::PathBuf;

/// One analysis wired to one destination
pub struct Summary {
    analyzer: Box<dyn Analyzer>,
    target: Box<dyn OutputTarget>,
}

impl Summary {
    pub fn new(analyzer: Box<dyn Analyzer>, target: Box<dyn OutputTarget>) -> Self {
        Summary { analyzer, target }
    }

    /// Win count for `team`, delivered as an HTML file at `path`
    pub fn wins_to_html<S: Into<String>, P: Into<PathBuf>>(team: S, path: P) -> Self {
        Summary::new(
            Box::new(WinAnalysis::new(team)),
            Box::new(HtmlReport::new(path)),
        )
    }

    /// Win count for `team`, delivered on standard output
    pub fn wins_to_console<S: Into<String>>(team: S) -> Self {
        Summary::new(Box::new(WinAnalysis::new(team)), Box::new(ConsoleReport))
    }

    /// Run the analysis over the records and print the result
    pub fn build_and_print_report(&self, matches: &[MatchRecord]) -> Result<()> {
        let output = self.analyzer.run(matches);
        self.target.print(&output)
    }
}
