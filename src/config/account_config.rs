//! Account config module.
//!
//! This module contains the runtime representation of the user
//! configuration, resolved from the configuration file and the
//! command line.

use anyhow::{anyhow, Result};
use log::{debug, trace};

use crate::{cli::Cli, config::DeserializedConfig};

/// Represents the resolved account configuration. All fields are
/// validated and ready to be used by the pipeline.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Represents the IMAP server hostname.
    pub imap_host: String,
    /// Represents the IMAP server port.
    pub imap_port: u16,
    /// Represents the account login.
    pub login: String,
    /// Represents the account password.
    pub passwd: String,
    /// Represents the mailbox to search.
    pub mailbox: String,
    /// Represents the start date as given by the user (YYYY-MM-DD),
    /// kept raw for the report file name.
    pub start_date: String,
    /// Represents the end date as given by the user (YYYY-MM-DD,
    /// exclusive), kept raw for the report file name.
    pub end_date: String,
}

impl AccountConfig {
    /// Tries to build the account config from the deserialized config
    /// file and the command line arguments. Command line values take
    /// precedence over config file entries.
    pub fn from_config_and_cli(config: DeserializedConfig, cli: &Cli) -> Result<Self> {
        debug!("begin: resolving account config");

        if config.imap_host.is_empty() {
            return Err(anyhow!("cannot find IMAP host (imap_host config entry)"));
        }
        if config.login.is_empty() {
            return Err(anyhow!("cannot find login (login config entry)"));
        }
        if config.passwd.is_empty() {
            return Err(anyhow!("cannot find password (passwd config entry)"));
        }

        let start_date = cli
            .start
            .clone()
            .or(config.start_date)
            .ok_or_else(|| anyhow!("cannot find start date (--start flag or start_date config entry)"))?;
        let end_date = cli
            .end
            .clone()
            .or(config.end_date)
            .ok_or_else(|| anyhow!("cannot find end date (--end flag or end_date config entry)"))?;

        let account = Self {
            imap_host: config.imap_host,
            imap_port: config.imap_port,
            login: config.login,
            passwd: config.passwd,
            mailbox: cli.mailbox.clone().unwrap_or(config.mailbox),
            start_date,
            end_date,
        };
        trace!("account config: {:?}", account);

        debug!("end: resolving account config");
        Ok(account)
    }
}
