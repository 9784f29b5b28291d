use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::AddOutcome;
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{success, warning};

/// Add a new piece of gear with blank tracks.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let mut store = CsvStore::from_config(cfg);
        let mut table = store.load()?;

        match table.add_equipment(name)? {
            AddOutcome::Added => {
                store.save(&table)?;
                success(format!("Added new gear: {}", name.trim()));
            }
            AddOutcome::Duplicate => {
                warning(format!("Gear '{}' already exists: nothing to do.", name.trim()));
            }
        }
    }

    Ok(())
}
