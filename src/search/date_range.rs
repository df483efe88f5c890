//! Date range module.
//!
//! This module turns a pair of calendar dates into the IMAP search
//! query matching them.

use anyhow::{Context, Result};
use chrono::NaiveDate;

const INPUT_DATE_FMT: &str = "%Y-%m-%d";
const IMAP_DATE_FMT: &str = "%d-%b-%Y";

/// Represents a calendar date range. The start date is inclusive, the
/// end date exclusive: the generated query matches messages sent on
/// or after the start date and strictly before the end date. Callers
/// wanting an inclusive end must pass one day past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    raw_start: String,
    raw_end: String,
}

impl DateRange {
    /// Tries to parse a date range from two YYYY-MM-DD strings. The
    /// raw strings are kept as given for the report file name.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start_date = NaiveDate::parse_from_str(start, INPUT_DATE_FMT)
            .context(format!("cannot parse start date {:?}", start))?;
        let end_date = NaiveDate::parse_from_str(end, INPUT_DATE_FMT)
            .context(format!("cannot parse end date {:?}", end))?;

        Ok(Self {
            start: start_date,
            end: end_date,
            raw_start: start.to_owned(),
            raw_end: end.to_owned(),
        })
    }

    /// Formats the start date the way the IMAP protocol expects it
    /// (eg. 01-Jun-2023).
    pub fn start_display(&self) -> String {
        self.start.format(IMAP_DATE_FMT).to_string()
    }

    /// Formats the end date the way the IMAP protocol expects it.
    pub fn end_display(&self) -> String {
        self.end.format(IMAP_DATE_FMT).to_string()
    }

    pub fn raw_start(&self) -> &str {
        &self.raw_start
    }

    pub fn raw_end(&self) -> &str {
        &self.raw_end
    }

    /// Builds the IMAP search query matching the range.
    pub fn to_imap_query(&self) -> String {
        format!(
            "(SENTSINCE {} SENTBEFORE {})",
            self.start_display(),
            self.end_display()
        )
    }
}
