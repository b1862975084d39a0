//! Chat message formatting

use crate::advisor::{ChatMessage, Role};

/// Format one chat message with its speaker label
pub fn format_message(message: &ChatMessage) -> String {
    let label = match message.role {
        Role::User => "You",
        Role::Assistant => "Advisor",
    };
    format!("{}: {}", label, message.text)
}
