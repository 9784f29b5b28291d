use super::RecordStore;
use crate::errors::AppResult;
use crate::models::GearTable;

/// Keeps the table in memory. No bootstrap: an untouched store loads empty.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: GearTable,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: GearTable) -> Self {
        Self { table, saves: 0 }
    }

    pub fn table(&self) -> &GearTable {
        &self.table
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> AppResult<GearTable> {
        Ok(self.table.clone())
    }

    fn save(&mut self, table: &GearTable) -> AppResult<()> {
        self.table = table.clone();
        self.saves += 1;
        Ok(())
    }
}
