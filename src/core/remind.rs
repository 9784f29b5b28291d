use crate::core::schedule::{DueReminder, due_sweep, mark_sent};
use crate::models::GearTable;
use crate::notify::{Ack, Notifier, NotifyError};
use chrono::NaiveDate;

pub const REMINDER_SUBJECT: &str = "Gear Reminder - Action Needed Today";

/// One line per due track, newline-joined.
pub fn build_body(due: &[DueReminder]) -> String {
    due.iter()
        .map(DueReminder::message_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// What a sweep-and-notify pass did.
#[derive(Debug)]
pub enum SweepOutcome {
    NothingDue,
    /// Email delivered; `marked` tracks flipped to notified.
    Notified {
        due: Vec<DueReminder>,
        ack: Ack,
        marked: usize,
    },
    /// Delivery failed; the table was left untouched.
    Failed {
        due: Vec<DueReminder>,
        error: NotifyError,
    },
}

impl SweepOutcome {
    pub fn due(&self) -> &[DueReminder] {
        match self {
            SweepOutcome::NothingDue => &[],
            SweepOutcome::Notified { due, .. } | SweepOutcome::Failed { due, .. } => due,
        }
    }

    /// `true` when the table changed and must be saved.
    pub fn table_changed(&self) -> bool {
        matches!(self, SweepOutcome::Notified { marked, .. } if *marked > 0)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SweepOutcome::Failed { .. })
    }
}

/// Sweep + notify + mark, shared by the `remind` command and the checker.
pub struct ReminderLogic;

impl ReminderLogic {
    /// Run the sweep and send one consolidated message through `notifier`.
    pub fn sweep_and_notify<N: Notifier>(
        table: &mut GearTable,
        notifier: &N,
        today: NaiveDate,
    ) -> SweepOutcome {
        Self::sweep_and_notify_with(table, today, || Ok(notifier))
    }

    /// Like [`ReminderLogic::sweep_and_notify`], but the notifier is only built
    /// when something is due. A build error counts as a failed delivery.
    pub fn sweep_and_notify_with<N, F>(
        table: &mut GearTable,
        today: NaiveDate,
        make_notifier: F,
    ) -> SweepOutcome
    where
        N: Notifier,
        F: FnOnce() -> Result<N, NotifyError>,
    {
        let due = due_sweep(table, today);
        if due.is_empty() {
            return SweepOutcome::NothingDue;
        }

        let body = build_body(&due);
        let sent = make_notifier().and_then(|n| n.send(REMINDER_SUBJECT, &body));

        match sent {
            Ok(ack) => {
                let marked = mark_sent(table, &due);
                SweepOutcome::Notified { due, ack, marked }
            }
            Err(error) => SweepOutcome::Failed { due, error },
        }
    }
}
