//! Persistence of the gear table.
//!
//! Callers only see [`RecordStore`]; the CSV file is one implementation, the
//! in-memory store another.

mod csv_store;
pub mod import;
mod memory;
pub mod migrate;
pub mod row;
pub mod seed;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::GearTable;

pub trait RecordStore {
    /// Return the full table. Implementations recover from missing or
    /// unreadable state on their own; an error means the state could not be
    /// recreated either.
    fn load(&mut self) -> AppResult<GearTable>;

    /// Persist the full table, replacing what was stored before.
    fn save(&mut self, table: &GearTable) -> AppResult<()>;
}
