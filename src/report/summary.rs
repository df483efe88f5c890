//! Summary module.
//!
//! This module contains the human-readable run summary printed after
//! the fetch loop.

use std::fmt;

use crate::search::DateRange;

/// Represents the end-of-run statistics.
#[derive(Debug)]
pub struct Summary<'a> {
    pub account: &'a str,
    pub date_range: &'a DateRange,
    pub total: usize,
    pub unique: usize,
    pub skipped: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Statistics for completed task for {}:", self.account)?;
        writeln!(
            f,
            "Date Range: from {} to {}",
            self.date_range.start_display(),
            self.date_range.end_display()
        )?;
        writeln!(f, "Total Emails Processed: {}", self.total)?;
        write!(f, "Total Unique Senders Fetched: {}", self.unique)?;
        if self.skipped > 0 {
            write!(f, "\nSkipped Messages: {}", self.skipped)?;
        }
        Ok(())
    }
}
