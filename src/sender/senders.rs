//! Senders module.
//!
//! This module contains the deduplicating sender collection.

use std::{collections::BTreeSet, ops::Deref};

use crate::sender::Sender;

/// Represents the collection of unique senders. Backed by an ordered
/// set so the report rows come out in a deterministic order.
#[derive(Debug, Default)]
pub struct Senders(pub BTreeSet<Sender>);

impl Senders {
    /// Inserts a sender, returning false if the exact pair was
    /// already collected.
    pub fn insert(&mut self, sender: Sender) -> bool {
        self.0.insert(sender)
    }
}

impl Deref for Senders {
    type Target = BTreeSet<Sender>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Sender> for Senders {
    fn from_iter<T: IntoIterator<Item = Sender>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
