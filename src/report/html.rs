//! HTML file report target

use crate::report::OutputTarget;
use crate::Result;
use std::path::PathBuf;

/// Wraps the report in a fixed HTML fragment and overwrites `path` on
/// every print. The message is substituted verbatim, unescaped. The parent
/// directory must already exist; a missing directory surfaces as an IO
/// error.
pub struct HtmlReport {
    path: PathBuf,
}

impl HtmlReport {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        HtmlReport { path: path.into() }
    }

    fn render(report: &str) -> String {
        format!(
            "<div>\n  <h1>Analysis Output</h1>\n  <div>{}</div>\n</div>\n",
            report
        )
    }
}

impl OutputTarget for HtmlReport {
    fn print(&self, report: &str) -> Result<()> {
        std::fs::write(&self.path, Self::render(report))?;
        log::info!("Report written to {}", self.path.display());
        Ok(())
    }
}
