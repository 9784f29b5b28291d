//! Sample gear list written into a brand-new store.

use crate::models::{EquipmentRecord, GearTable, TrackState};
use crate::utils::date::parse_lenient;

/// `(name, TRTR last opened, MNTT last opened)`; empty or malformed dates stay blank.
const SAMPLE_GEAR: [(&str, &str, &str); 24] = [
    ("POINTS - ERS SIDE", "2025-06-09", "2025-06-20"),
    ("POINTS - KTYM SIDE", "2025-06-17", "2025-06-20"),
    ("TC & SIG - KTYM SIDE", "2025-06-24", "2025-06-20"),
    ("TC & SIG - ERS PF SIDE", "2025-06-08", "2025-06-27"),
    ("TC & SIG - LC-7 SIDE", "2025-06-27", ""),
    ("BLOCK - KTYM SIDE", "2025-06-26", ""),
    ("BLOCK - ERS SIDE", "2025-06-25", "2025-06-28"),
    ("RELAY ROOM & PANEL", "2025-06-06", "2025-06-06"),
    ("IPS & BATTERY", "2025-06-15", "2025-06-28"),
    ("HASSDAC - ERS SIDE", "2025-06-27", "2025-06-27"),
    ("HASSDAC - KTYM SIDE", "2025-06-24", ""),
    ("DATALOGGER", "2025-06-25", "2025-06-28"),
    ("ELD", "2025-06-15", "2025-06-28"),
    ("FIRE ALARM", "2025-06-25", "2025-06-28"),
    ("CRANK HANDLE", "2025-01-23", "2025-01-19"),
    ("ERS - D", "", "2025-06-27"),
    ("LC GATES", "", "DATES"),
    ("LC - 5", "", "2025-06-03"),
    ("LC - 6", "", "2025-06-03"),
    ("LC - 7 (TF)", "", "2025-04-20"),
    ("LC - 9", "", "2025-06-22"),
    ("LC - 10", "", "2025-06-22"),
    ("LC - 11", "", "2025-06-22"),
    ("LC - 12", "", "2025-05-26"),
];

fn track(raw: &str) -> TrackState {
    parse_lenient(raw)
        .map(TrackState::opened)
        .unwrap_or_else(TrackState::blank)
}

pub fn sample_table() -> GearTable {
    GearTable::from_records(
        SAMPLE_GEAR
            .iter()
            .map(|(name, trtr, mntt)| EquipmentRecord {
                name: name.to_string(),
                trtr: track(trtr),
                mntt: track(mntt),
            })
            .collect(),
    )
}
