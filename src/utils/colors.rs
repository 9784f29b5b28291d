//! ANSI color helper utilities for terminal output.

use crate::models::ReminderState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Grey placeholder for empty values, plain text otherwise.
///
/// Example:
/// `colorize_optional("")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Reminder flag: pending → yellow, notified → green, unset → grey placeholder.
pub fn colorize_reminder(state: ReminderState) -> String {
    match state {
        ReminderState::Unset => colorize_optional(""),
        ReminderState::Pending => format!("{YELLOW}{}{RESET}", state.to_db_str()),
        ReminderState::Notified => format!("{GREEN}{}{RESET}", state.to_db_str()),
    }
}
