use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "fetch-senders", version, about)]
pub struct Cli {
    /// Override the default configuration file path
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start of the date range (YYYY-MM-DD, inclusive)
    ///
    /// Overrides the start_date entry of the configuration file.
    #[arg(long, short, value_name = "DATE")]
    pub start: Option<String>,

    /// End of the date range (YYYY-MM-DD, exclusive)
    ///
    /// Only messages sent strictly before this date are matched. Pass
    /// one day past the last day you want included. Overrides the
    /// end_date entry of the configuration file.
    #[arg(long, short, value_name = "DATE")]
    pub end: Option<String>,

    /// Name of the mailbox to search
    #[arg(long, short, value_name = "NAME")]
    pub mailbox: Option<String>,

    /// Directory the CSV report is written to
    #[arg(long, short, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}
