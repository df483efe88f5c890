pub mod cli;

pub mod config {
    pub mod account_config;
    pub use account_config::*;

    pub mod deserialized_config;
    pub use deserialized_config::*;
}

pub mod imap {
    pub mod imap_session;
    pub use imap_session::*;
}

pub mod search {
    pub mod date_range;
    pub use date_range::*;
}

pub mod sender {
    pub mod sender;
    pub use sender::*;

    pub mod senders;
    pub use senders::*;

    pub mod sender_handlers;
}

pub mod report {
    pub mod csv_report;

    pub mod summary;
    pub use summary::*;
}
