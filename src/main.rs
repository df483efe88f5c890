use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use fetch_senders::{
    cli::Cli,
    config::{AccountConfig, DeserializedConfig},
    imap::ImapSession,
    report::{csv_report, Summary},
    search::DateRange,
    sender::sender_handlers,
};

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "off"),
    );

    let cli = Cli::parse();
    debug!("cli args: {:?}", cli);

    let config = DeserializedConfig::from_opt_path(cli.config.as_deref())?;
    let account = AccountConfig::from_config_and_cli(config, &cli)?;

    // Dates are validated before anything touches the network.
    let range = DateRange::parse(&account.start_date, &account.end_date)?;

    let mut session = ImapSession::open(&account)?;

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template("Processing emails {pos}/{len} [{wide_bar}] {percent}%")
            .context("cannot build progress bar template")?,
    );
    let report = sender_handlers::export(&mut session, &range, |processed, total| {
        progress.set_length(total);
        progress.set_position(processed);
    })?;
    progress.finish_and_clear();

    // Release the session before writing the report; a failed logout
    // must not lose the collected data.
    session.logout();

    println!(
        "{}",
        Summary {
            account: &account.login,
            date_range: &range,
            total: report.total,
            unique: report.senders.len(),
            skipped: report.skipped,
        }
    );

    let file_name = csv_report::file_name(&account.login, &range);
    let path = match cli.output_dir {
        Some(dir) => dir.join(&file_name),
        None => file_name.into(),
    };
    csv_report::write(&path, &report.senders)?;
    println!("Sender data has been saved to '{}'.", path.display());

    Ok(())
}
