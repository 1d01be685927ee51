use std::fmt;

use crate::models::SuspicionFlag;

pub const FETCHING_LINE: &str = "[•] Fetching token transfers...";

pub fn fetched_line(count: usize) -> String {
    format!("[✓] Transfers found: {count}. Analyzing...")
}

/// Outcome of one scan, rendered as the "Scan results" block.
#[derive(Debug, Clone)]
pub struct ScanReport<'a> {
    pub flags: &'a [SuspicionFlag],
}

impl<'a> ScanReport<'a> {
    pub fn new(flags: &'a [SuspicionFlag]) -> Self {
        Self { flags }
    }
}

impl fmt::Display for ScanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Scan results:")?;

        if self.flags.is_empty() {
            writeln!(f, "✓ No suspicious tokens found.")?;
        } else {
            for flag in self.flags {
                writeln!(f, "- {flag}")?;
            }
        }

        Ok(())
    }
}
