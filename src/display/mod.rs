//! Display formatting for terminal output
//!
//! Tables, bars and chat lines for the CLI.

pub mod conversation;
pub mod report;
pub mod transaction;

pub use conversation::format_message;
pub use transaction::{format_transaction_list, format_transaction_short};
