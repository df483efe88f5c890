//! Sender handlers module.
//!
//! This module gathers the fetch-and-collect pipeline: search the
//! mailbox, fetch each message, extract its sender and deduplicate.

use anyhow::Result;
use log::{debug, trace, warn};

use crate::{
    search::DateRange,
    sender::{Sender, Senders},
};

/// Represents a source of raw messages. The IMAP session implements
/// it; tests substitute an in-memory source.
pub trait MessageSource {
    /// Searches the selected mailbox and returns the matching message
    /// sequence numbers in ascending order.
    fn search(&mut self, query: &str) -> Result<Vec<u32>>;

    /// Fetches the full raw content of one message.
    fn fetch(&mut self, seq: u32) -> Result<Vec<u8>>;
}

/// Represents the outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Represents the total number of messages matched by the search.
    pub total: usize,
    /// Represents the number of messages skipped because their sender
    /// could not be extracted.
    pub skipped: usize,
    /// Represents the unique senders collected.
    pub senders: Senders,
}

/// Collects the unique senders of all messages matching the date
/// range. The progress callback is invoked once per processed message
/// with (processed, total). A message whose sender cannot be parsed
/// is logged, counted as skipped and does not abort the run; fetch
/// failures stay fatal.
pub fn export<S, F>(source: &mut S, range: &DateRange, mut on_progress: F) -> Result<ExportReport>
where
    S: MessageSource + ?Sized,
    F: FnMut(u64, u64),
{
    let query = range.to_imap_query();
    debug!("search query: {}", query);

    let seqs = source.search(&query)?;
    let total = seqs.len();
    debug!("found {} messages", total);

    let mut senders = Senders::default();
    let mut skipped = 0;

    for (processed, seq) in seqs.into_iter().enumerate() {
        let raw = source.fetch(seq)?;
        match Sender::from_raw_msg(&raw) {
            Ok(sender) => {
                trace!("message {}: sender {:?}", seq, sender);
                senders.insert(sender);
            }
            Err(err) => {
                warn!("skipping message {}: {:#}", seq, err);
                skipped += 1;
            }
        }
        on_progress((processed + 1) as u64, total as u64);
    }

    Ok(ExportReport {
        total,
        skipped,
        senders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct TestSource {
        msgs: HashMap<u32, Vec<u8>>,
    }

    impl TestSource {
        fn push(&mut self, seq: u32, raw: &str) {
            self.msgs.insert(seq, raw.as_bytes().to_vec());
        }
    }

    impl MessageSource for TestSource {
        fn search(&mut self, _query: &str) -> Result<Vec<u32>> {
            let mut seqs: Vec<u32> = self.msgs.keys().copied().collect();
            seqs.sort_unstable();
            Ok(seqs)
        }

        fn fetch(&mut self, seq: u32) -> Result<Vec<u8>> {
            Ok(self.msgs[&seq].clone())
        }
    }

    fn range() -> DateRange {
        DateRange::parse("2023-06-01", "2023-07-01").unwrap()
    }

    #[test]
    fn it_should_export_nothing_from_empty_mailbox() {
        let mut source = TestSource::default();
        let report = export(&mut source, &range(), |_, _| ()).unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.skipped, 0);
        assert!(report.senders.is_empty());
    }

    #[test]
    fn it_should_dedupe_senders_across_messages() {
        let mut source = TestSource::default();
        source.push(1, "From: Jane Doe <jane@example.com>\r\n\r\nhi\r\n");
        source.push(2, "From: Jane Doe <JANE@example.com>\r\n\r\nhi again\r\n");
        source.push(3, "From: John Doe <john@example.com>\r\n\r\nhello\r\n");

        let report = export(&mut source, &range(), |_, _| ()).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.senders.len(), 2);
    }

    #[test]
    fn it_should_skip_unparseable_messages() {
        let mut source = TestSource::default();
        source.push(1, "From: Jane Doe <jane@example.com>\r\n\r\nhi\r\n");
        source.push(2, "Subject: no sender\r\n\r\noops\r\n");

        let report = export(&mut source, &range(), |_, _| ()).unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.senders.len(), 1);
    }

    #[test]
    fn it_should_report_progress_per_message() {
        let mut source = TestSource::default();
        source.push(1, "From: a@example.com\r\n\r\n\r\n");
        source.push(2, "From: b@example.com\r\n\r\n\r\n");

        let mut calls = vec![];
        export(&mut source, &range(), |processed, total| {
            calls.push((processed, total))
        })
        .unwrap();

        assert_eq!(calls, [(1, 2), (2, 2)]);
    }
}
