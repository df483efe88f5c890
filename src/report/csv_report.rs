//! CSV report module.
//!
//! This module writes the collected senders to a UTF-8 CSV file.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::{search::DateRange, sender::Senders};

pub const CSV_HEADER: [&str; 2] = ["Sender Name", "Sender Email Address"];

/// Builds the report file name from the account login and the raw
/// date strings as given by the user.
pub fn file_name(login: &str, range: &DateRange) -> String {
    format!(
        "fetched_senders_{}_{}-{}.csv",
        login,
        range.raw_start(),
        range.raw_end()
    )
}

/// Writes the senders to a CSV file at the given path: a fixed header
/// row, then one row per unique sender.
pub fn write(path: &Path, senders: &Senders) -> Result<()> {
    debug!("write CSV report to {:?}", path);

    let mut writer =
        csv::Writer::from_path(path).context(format!("cannot create CSV report {:?}", path))?;
    writer
        .write_record(CSV_HEADER)
        .context("cannot write CSV report header")?;
    for sender in senders.iter() {
        writer
            .write_record([sender.name.as_str(), sender.email.as_str()])
            .context(format!("cannot write CSV row for {:?}", sender.email))?;
    }
    writer.flush().context("cannot flush CSV report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::Sender;
    use std::fs;

    fn senders(pairs: &[(&str, &str)]) -> Senders {
        pairs
            .iter()
            .map(|(name, email)| Sender {
                name: name.to_string(),
                email: email.to_string(),
            })
            .collect()
    }

    #[test]
    fn it_should_build_file_name_from_raw_dates() {
        let range = DateRange::parse("2023-06-01", "2023-07-01").unwrap();
        assert_eq!(
            file_name("jane", &range),
            "fetched_senders_jane_2023-06-01-2023-07-01.csv"
        );
    }

    #[test]
    fn it_should_write_header_only_for_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write(&path, &Senders::default()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Sender Name,Sender Email Address\n");
    }

    #[test]
    fn it_should_write_one_row_per_sender() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write(
            &path,
            &senders(&[
                ("Doe, Jane", "jane@example.com"),
                ("Jürgen Müller", "juergen@example.com"),
            ]),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Sender Name,Sender Email Address");
        // A name containing a comma must be quoted.
        assert!(lines.contains(&"\"Doe, Jane\",jane@example.com"));
        assert!(lines.contains(&"Jürgen Müller,juergen@example.com"));
    }

    #[test]
    fn it_should_round_trip_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let original = senders(&[
            ("Doe, Jane", "jane@example.com"),
            ("John", "john@example.com"),
        ]);
        write(&path, &original).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read_back: Senders = reader
            .records()
            .map(|record| {
                let record = record.unwrap();
                Sender {
                    name: record[0].to_string(),
                    email: record[1].to_lowercase(),
                }
            })
            .collect();

        assert_eq!(read_back.0, original.0);
    }

    #[test]
    fn it_should_fail_on_unwritable_path() {
        let err = write(
            Path::new("/does/not/exist/report.csv"),
            &Senders::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot create CSV report"));
    }
}
