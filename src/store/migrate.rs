//! Column detection for store files written by older versions or other tools.
//!
//! Headers are matched case-insensitively after trimming. Anything that maps onto
//! a known column is carried over; next-due values are always recomputed.

use crate::errors::{AppError, AppResult};
use crate::store::row::{COLUMNS, GearRow};
use csv::StringRecord;
use std::path::Path;

const NAME_ALIASES: [&str; 3] = ["name", "gear", "equipment"];
const TRTR_DATE_ALIASES: [&str; 4] = ["trtr_last_opened", "trtr date", "trtr_date", "trtr"];
const TRTR_SENT_ALIASES: [&str; 3] = ["trtr_reminder_sent", "trtr reminder sent", "trtr_sent"];
const MNTT_DATE_ALIASES: [&str; 4] = ["mntt_last_opened", "mntt date", "mntt_date", "mntt"];
const MNTT_SENT_ALIASES: [&str; 3] = ["mntt_reminder_sent", "mntt reminder sent", "mntt_sent"];

/// Where each known field lives in a given header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    name: usize,
    trtr_date: Option<usize>,
    trtr_sent: Option<usize>,
    mntt_date: Option<usize>,
    mntt_sent: Option<usize>,
    current: bool,
}

impl ColumnLayout {
    /// Inspect a header row. `None` means no name column could be found, i.e.
    /// the file is not a gear table at all.
    pub fn detect(headers: &StringRecord) -> Option<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h.as_str() == *alias))
        };

        let name = find(&NAME_ALIASES)?;
        let current = normalized.len() == COLUMNS.len()
            && normalized.iter().zip(COLUMNS.iter()).all(|(h, c)| h == c);

        Some(Self {
            name,
            trtr_date: find(&TRTR_DATE_ALIASES),
            trtr_sent: find(&TRTR_SENT_ALIASES),
            mntt_date: find(&MNTT_DATE_ALIASES),
            mntt_sent: find(&MNTT_SENT_ALIASES),
            current,
        })
    }

    /// `true` when the header is exactly the current column set.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Pull the known fields out of a data record. Missing cells read as empty.
    pub fn row_from(&self, record: &StringRecord) -> GearRow {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        GearRow {
            name: cell(Some(self.name)),
            trtr_last_opened: cell(self.trtr_date),
            trtr_next_due: String::new(),
            trtr_reminder_sent: cell(self.trtr_sent),
            mntt_last_opened: cell(self.mntt_date),
            mntt_next_due: String::new(),
            mntt_reminder_sent: cell(self.mntt_sent),
        }
    }
}

/// Read a CSV file in any recognised layout. Fully blank lines are skipped;
/// every other line yields one row.
pub fn read_csv_rows(path: &Path) -> AppResult<(ColumnLayout, Vec<GearRow>)> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    let layout = ColumnLayout::detect(&headers)
        .ok_or_else(|| AppError::Store("no equipment name column in header".into()))?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        rows.push(layout.row_from(&record));
    }

    Ok((layout, rows))
}

pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}
