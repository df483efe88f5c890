//! Sender module.
//!
//! This module contains the sender record extracted from the From
//! header of a message.

use anyhow::{anyhow, Context, Result};
use log::trace;
use mailparse::{self, MailHeaderMap};

/// Represents a unique sender: the decoded display name and the
/// lower-cased email address. Uniqueness is determined by the exact
/// pair, so the same address with two different names counts twice.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

impl Sender {
    /// Tries to extract the sender from a raw RFC822 message. Encoded
    /// words in the From header are decoded by the parser, falling
    /// back to UTF-8 when no charset is declared.
    pub fn from_raw_msg(raw: &[u8]) -> Result<Self> {
        let msg = mailparse::parse_mail(raw).context("cannot parse message")?;
        let from = msg
            .headers
            .get_first_value("From")
            .ok_or_else(|| anyhow!("cannot find From header"))?;
        trace!("decoded From header: {:?}", from);

        Self::from_header_value(&from)
    }

    /// Tries to extract the sender from a decoded From header value.
    pub fn from_header_value(from: &str) -> Result<Self> {
        let addrs = mailparse::addrparse(from)
            .context(format!("cannot parse address {:?}", from))?;

        let (display_name, addr) = match addrs.first() {
            Some(mailparse::MailAddr::Single(single)) => {
                (single.display_name.clone(), single.addr.clone())
            }
            Some(mailparse::MailAddr::Group(group)) => {
                let single = group.addrs.first().ok_or_else(|| {
                    anyhow!("cannot find address in group {:?}", group.group_name)
                })?;
                (
                    single
                        .display_name
                        .clone()
                        .or_else(|| Some(group.group_name.clone())),
                    single.addr.clone(),
                )
            }
            None => return Err(anyhow!("cannot find address in header {:?}", from)),
        };

        // When the header carries no separate display name, the whole
        // header text stands in for it, as in the reference report.
        let name = strip_trailing_addr(display_name.as_deref().unwrap_or(from));
        let email = addr.to_lowercase();

        Ok(Self { name, email })
    }
}

/// Truncates a display name at the first `<` and trims surrounding
/// whitespace. Some malformed From headers carry the angle-bracket
/// address glued to the name; this is a narrow cleanup for that shape,
/// kept separate from the address parsing itself.
pub fn strip_trailing_addr(name: &str) -> String {
    match name.find('<') {
        Some(pos) => name[..pos].trim().to_owned(),
        None => name.trim().to_owned(),
    }
}
