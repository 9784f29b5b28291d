//! One unattended reminder run: load → sweep → notify → mark → save.

use crate::core::remind::{ReminderLogic, SweepOutcome};
use crate::errors::AppResult;
use crate::notify::{Notifier, NotifyError};
use crate::store::RecordStore;
use chrono::NaiveDate;

pub struct Checker;

impl Checker {
    /// Perform one run against `store`.
    ///
    /// Only store errors are returned as `Err`; a failed delivery is reported
    /// through [`SweepOutcome::Failed`] and leaves the store untouched.
    pub fn run<S, N, F>(store: &mut S, today: NaiveDate, make_notifier: F) -> AppResult<SweepOutcome>
    where
        S: RecordStore + ?Sized,
        N: Notifier,
        F: FnOnce() -> Result<N, NotifyError>,
    {
        let mut table = store.load()?;
        tracing::debug!(rows = table.len(), %today, "reminder check started");

        let outcome = ReminderLogic::sweep_and_notify_with(&mut table, today, make_notifier);

        match &outcome {
            SweepOutcome::NothingDue => {
                tracing::info!(%today, "no reminders due today");
            }
            SweepOutcome::Notified { due, ack, marked } => {
                tracing::info!(
                    due = due.len(),
                    marked,
                    channel = %ack.channel,
                    "reminder sent"
                );
            }
            SweepOutcome::Failed { due, error } => {
                tracing::warn!(
                    due = due.len(),
                    error = %error,
                    "reminder not sent, will retry on next run"
                );
            }
        }

        if outcome.table_changed() {
            store.save(&table)?;
        }

        Ok(outcome)
    }
}
