//! Standard-output report target

use crate::report::OutputTarget;
use crate::Result;

/// Prints the report as one line on stdout
pub struct ConsoleReport;

impl OutputTarget for ConsoleReport {
    fn print(&self, report: &str) -> Result<()> {
        println!("{}", report);
        Ok(())
    }
}
