//! Due-date arithmetic and the reminder sweep.

use crate::models::{EquipmentRecord, GearTable, Track};
use chrono::{Days, NaiveDate};

/// Days between an opening and the next one.
pub const REMINDER_INTERVAL_DAYS: u64 = 14;

/// Next due date for a track opened on `date`.
///
/// Saturates at the last representable date instead of overflowing.
pub fn next_due_for(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(REMINDER_INTERVAL_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// A track instance selected by [`due_sweep`].
///
/// `row` indexes into the table the sweep ran on; `next_due` pins the due date
/// the reminder refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    pub row: usize,
    pub track: Track,
    pub name: String,
    pub next_due: NaiveDate,
}

impl DueReminder {
    /// Line used in the reminder email and on screen.
    pub fn message_line(&self) -> String {
        format!(
            "Gear: {} - {} needs to be opened today! (Next Open: {})",
            self.name,
            self.track,
            self.next_due.format("%Y-%m-%d")
        )
    }
}

/// Return a copy of `record` with `track` opened on `date`.
pub fn record_opened(record: &EquipmentRecord, track: Track, date: NaiveDate) -> EquipmentRecord {
    record.clone().with_opened(track, date)
}

/// Select every track whose next due date is `today` and whose reminder has not
/// gone out yet.
///
/// All TRTR entries come first, then MNTT, each in table order.
pub fn due_sweep(table: &GearTable, today: NaiveDate) -> Vec<DueReminder> {
    let mut due = Vec::new();

    for track in Track::ALL {
        for (row, rec) in table.records().iter().enumerate() {
            let state = rec.track(track);

            if state.reminder().is_notified() {
                continue;
            }

            if let Some(next_due) = state.next_due()
                && next_due == today
            {
                due.push(DueReminder {
                    row,
                    track,
                    name: rec.name.clone(),
                    next_due,
                });
            }
        }
    }

    due
}

/// Flag the selected reminders as sent.
///
/// Entries whose row vanished or whose due date moved since the sweep are skipped.
/// Returns how many tracks were actually marked.
pub fn mark_sent(table: &mut GearTable, due: &[DueReminder]) -> usize {
    let mut marked = 0;

    for item in due {
        let Some(rec) = table.records_mut().get_mut(item.row) else {
            continue;
        };

        if rec.name != item.name {
            continue;
        }

        let state = rec.track_mut(item.track);
        if state.next_due() == Some(item.next_due) && !state.reminder().is_notified() {
            state.mark_notified();
            marked += 1;
        }
    }

    marked
}
