//! Flat, string-only view of a record as it appears in the store file.

use crate::models::{EquipmentRecord, GearTable, ReminderState, TrackState};
use crate::utils::date::{format_opt, parse_lenient};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Store columns, in file order.
pub const COLUMNS: [&str; 7] = [
    "name",
    "trtr_last_opened",
    "trtr_next_due",
    "trtr_reminder_sent",
    "mntt_last_opened",
    "mntt_next_due",
    "mntt_reminder_sent",
];

/// Field order must match `COLUMNS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearRow {
    pub name: String,
    pub trtr_last_opened: String,
    pub trtr_next_due: String,
    pub trtr_reminder_sent: String,
    pub mntt_last_opened: String,
    pub mntt_next_due: String,
    pub mntt_reminder_sent: String,
}

impl From<&EquipmentRecord> for GearRow {
    fn from(rec: &EquipmentRecord) -> Self {
        Self {
            name: rec.name.clone(),
            trtr_last_opened: format_opt(rec.trtr.last_opened()),
            trtr_next_due: format_opt(rec.trtr.next_due()),
            trtr_reminder_sent: rec.trtr.reminder().to_db_str().to_string(),
            mntt_last_opened: format_opt(rec.mntt.last_opened()),
            mntt_next_due: format_opt(rec.mntt.next_due()),
            mntt_reminder_sent: rec.mntt.reminder().to_db_str().to_string(),
        }
    }
}

impl GearRow {
    /// Convert into a typed record.
    ///
    /// Next-due columns are ignored and recomputed from the opening date;
    /// unparseable dates leave the track blank. The name is only trimmed, so it
    /// may come back empty: [`rows_to_table`] decides what to call such rows.
    pub fn into_record(self) -> EquipmentRecord {
        let trtr = TrackState::from_parts(
            parse_lenient(&self.trtr_last_opened),
            ReminderState::from_db_str(&self.trtr_reminder_sent),
        );
        let mntt = TrackState::from_parts(
            parse_lenient(&self.mntt_last_opened),
            ReminderState::from_db_str(&self.mntt_reminder_sent),
        );

        EquipmentRecord {
            name: self.name.trim().to_string(),
            trtr,
            mntt,
        }
    }

    pub fn as_fields(&self) -> [&str; 7] {
        [
            &self.name,
            &self.trtr_last_opened,
            &self.trtr_next_due,
            &self.trtr_reminder_sent,
            &self.mntt_last_opened,
            &self.mntt_next_due,
            &self.mntt_reminder_sent,
        ]
    }
}

/// All rows of `table`, in order.
pub fn table_rows(table: &GearTable) -> Vec<GearRow> {
    table.records().iter().map(GearRow::from).collect()
}

/// Build a table with one record per raw row.
///
/// Names must be unique, so a row without a name becomes `UNNAMED ROW <n>` and a
/// repeated name becomes `<name> (ROW <n>)`, `n` being the 1-based data row.
/// Nothing is dropped: the operator can rename or ignore these records later.
pub fn rows_to_table(rows: Vec<GearRow>) -> GearTable {
    let mut taken: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());

    for (idx, row) in rows.into_iter().enumerate() {
        let mut rec = row.into_record();
        let n = idx + 1;

        if rec.name.is_empty() {
            rec.name = unique_name(&taken, format!("UNNAMED ROW {n}"));
            tracing::warn!(row = n, name = %rec.name, "store row without a name kept under a placeholder");
        } else if taken.contains(&rec.name) {
            let renamed = unique_name(&taken, format!("{} (ROW {n})", rec.name));
            tracing::warn!(row = n, original = %rec.name, name = %renamed, "duplicate name kept under a new name");
            rec.name = renamed;
        }

        taken.insert(rec.name.clone());
        records.push(rec);
    }

    GearTable::from_records(records)
}

fn unique_name(taken: &HashSet<String>, base: String) -> String {
    if !taken.contains(&base) {
        return base;
    }
    (2..)
        .map(|i| format!("{base} #{i}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or(base)
}
