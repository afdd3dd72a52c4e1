//! Report delivery
//!
//! An [`OutputTarget`] accepts a finished report message and emits it
//! somewhere; callers never inspect the destination.

mod console;
mod html;

pub use console::ConsoleReport;
pub use html::HtmlReport;

use crate::Result;

/// Destination for a one-line report message
pub trait OutputTarget {
    fn print(&self, report: &str) -> Result<()>;
}
