//! IMAP session module.
//!
//! This module contains the scoped IMAP session: opened once at the
//! start of the pipeline, released on every exit path.

use anyhow::{anyhow, Context, Result};
use log::{debug, log_enabled, warn, Level};
use native_tls::{TlsConnector, TlsStream};
use std::net::TcpStream;

use crate::{config::AccountConfig, sender::sender_handlers::MessageSource};

type Session = imap::Session<TlsStream<TcpStream>>;

/// Represents an authenticated IMAP session with a selected mailbox.
/// Logout is attempted on drop, so early failure paths release the
/// session too.
pub struct ImapSession {
    sess: Option<Session>,
}

impl ImapSession {
    /// Tries to open a session: TLS connect, login, then select the
    /// mailbox. Each step fails with its own error.
    pub fn open(account: &AccountConfig) -> Result<Self> {
        debug!("create TLS connector");
        let tls = TlsConnector::new().context("cannot create TLS connector")?;

        debug!("connect to {}:{}", account.imap_host, account.imap_port);
        let client = imap::connect(
            (account.imap_host.as_str(), account.imap_port),
            &account.imap_host,
            &tls,
        )
        .context(format!(
            "cannot connect to IMAP server {}:{}",
            account.imap_host, account.imap_port
        ))?;

        debug!("login as {}", account.login);
        let mut sess = client
            .login(&account.login, &account.passwd)
            .map_err(|res| res.0)
            .context(format!("cannot login to IMAP server as {}", account.login))?;
        sess.debug = log_enabled!(Level::Trace);

        debug!("select mailbox {:?}", account.mailbox);
        sess.select(&account.mailbox)
            .context(format!("cannot select mailbox {}", account.mailbox))?;

        Ok(Self { sess: Some(sess) })
    }

    fn sess(&mut self) -> Result<&mut Session> {
        self.sess
            .as_mut()
            .ok_or_else(|| anyhow!("cannot use IMAP session: already closed"))
    }

    /// Logs out from the server. Idempotent; a logout failure is
    /// logged but never propagated, since the collected data still
    /// has to be written.
    pub fn logout(&mut self) {
        if let Some(mut sess) = self.sess.take() {
            debug!("logout from IMAP server");
            if let Err(err) = sess.logout() {
                warn!("cannot logout from IMAP server: {}", err);
            }
        }
    }
}

impl MessageSource for ImapSession {
    fn search(&mut self, query: &str) -> Result<Vec<u32>> {
        let mut seqs: Vec<u32> = self
            .sess()?
            .search(query)
            .context(format!("cannot search messages with query {:?}", query))?
            .into_iter()
            .collect();
        // The imap crate hands the ids back as a set; restore the
        // mailbox order.
        seqs.sort_unstable();
        Ok(seqs)
    }

    fn fetch(&mut self, seq: u32) -> Result<Vec<u8>> {
        let fetches = self
            .sess()?
            .fetch(seq.to_string(), "BODY[]")
            .context(format!("cannot fetch message {}", seq))?;
        let fetch = fetches
            .first()
            .ok_or_else(|| anyhow!("cannot find message {}", seq))?;
        Ok(fetch.body().unwrap_or_default().to_vec())
    }
}

impl Drop for ImapSession {
    fn drop(&mut self) {
        self.logout();
    }
}
