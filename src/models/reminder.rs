/// Reminder bookkeeping for a single track.
///
/// - `Unset`    → the track was never opened
/// - `Pending`  → a due date exists and no reminder went out for it yet
/// - `Notified` → a sweep already delivered the reminder for the current due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderState {
    #[default]
    Unset,
    Pending,
    Notified,
}

impl ReminderState {
    /// Convert enum → store string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReminderState::Unset => "",
            ReminderState::Pending => "No",
            ReminderState::Notified => "Yes",
        }
    }

    /// Convert store string → enum.
    ///
    /// Only an explicit "Yes" counts as notified; every other value is read as
    /// "not yet sent" so that a hand-edited flag can never swallow a reminder.
    pub fn from_db_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" => ReminderState::Unset,
            "yes" => ReminderState::Notified,
            _ => ReminderState::Pending,
        }
    }

    pub fn is_notified(&self) -> bool {
        matches!(self, ReminderState::Notified)
    }
}
