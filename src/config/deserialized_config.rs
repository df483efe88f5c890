//! Deserialized config module.
//!
//! This module contains the raw, deserialized representation of the
//! user configuration file.

use anyhow::{anyhow, Context, Result};
use log::{debug, trace};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_IMAP_PORT: u16 = 993;
pub const DEFAULT_MAILBOX: &str = "INBOX";

/// Represents the user configuration file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DeserializedConfig {
    /// Represents the IMAP server hostname.
    pub imap_host: String,
    /// Represents the IMAP server port.
    #[serde(default = "default_imap_port")]
    pub imap_port: u16,
    /// Represents the account login.
    pub login: String,
    /// Represents the account password.
    pub passwd: String,
    /// Represents the mailbox to search.
    #[serde(default = "default_mailbox")]
    pub mailbox: String,
    /// Represents the start of the date range (YYYY-MM-DD).
    pub start_date: Option<String>,
    /// Represents the end of the date range (YYYY-MM-DD, exclusive).
    pub end_date: Option<String>,
}

fn default_imap_port() -> u16 {
    DEFAULT_IMAP_PORT
}

fn default_mailbox() -> String {
    DEFAULT_MAILBOX.into()
}

impl DeserializedConfig {
    /// Tries to create a config from an optional path.
    pub fn from_opt_path(path: Option<&Path>) -> Result<Self> {
        debug!("init config from path");
        let path = match path {
            Some(path) => path.to_owned(),
            None => Self::default_path()?,
        };
        debug!("config path: {:?}", path);

        let content = fs::read_to_string(&path)
            .context(format!("cannot read config file {:?}", path))?;
        let config: Self = toml::from_str(&content)
            .context(format!("cannot parse config file {:?}", path))?;
        trace!("config: {:?}", config);

        Ok(config)
    }

    /// Tries to get the default config file path from the XDG config
    /// directory.
    pub fn default_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| anyhow!("cannot find config directory"))?
            .join("fetch-senders")
            .join("config.toml"))
    }
}
