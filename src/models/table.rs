use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentRecord;
use crate::models::track::Track;
use chrono::NaiveDate;

/// Result of adding a piece of gear by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

/// All equipment records, in insertion order.
///
/// Names are unique and compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GearTable {
    records: Vec<EquipmentRecord>,
}

impl GearTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records, keeping the first occurrence of each name.
    pub fn from_records(records: Vec<EquipmentRecord>) -> Self {
        let mut table = Self::new();
        for rec in records {
            if table.find(&rec.name).is_none() {
                table.records.push(rec);
            } else {
                tracing::warn!(name = %rec.name, "dropping duplicate equipment row");
            }
        }
        table
    }

    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [EquipmentRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the record called `name`, if any.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Append a blank record. Duplicates leave the table untouched.
    pub fn add_equipment(&mut self, name: &str) -> AppResult<AddOutcome> {
        let name = validate_name(name)?;

        if self.find(name).is_some() {
            return Ok(AddOutcome::Duplicate);
        }

        self.records.push(EquipmentRecord::new(name));
        Ok(AddOutcome::Added)
    }

    /// Mark `track` as opened on `date` for `name`, creating the record when needed.
    ///
    /// Returns `true` when a new record was appended.
    pub fn upsert_by_name(&mut self, name: &str, track: Track, date: NaiveDate) -> AppResult<bool> {
        let name = validate_name(name)?;

        if let Some(idx) = self.position(name) {
            self.records[idx].open(track, date);
            return Ok(false);
        }

        self.records
            .push(EquipmentRecord::new(name).with_opened(track, date));
        Ok(true)
    }
}

fn validate_name(name: &str) -> AppResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidName("name cannot be empty".into()));
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(AppError::InvalidName(format!(
            "'{}' contains a line break",
            trimmed.escape_debug()
        )));
    }
    Ok(trimmed)
}
