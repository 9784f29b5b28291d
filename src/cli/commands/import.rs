use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::import::import_table;
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Replace the store with a gear list read from another file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force } = cmd {
        let source = expand_tilde(file.trim());
        let imported = import_table(&source)?;

        let mut store = CsvStore::from_config(cfg);
        if store.exists() {
            let current = store.load()?;
            if !current.is_empty() && !*force {
                return Err(AppError::Store(format!(
                    "store already holds {} item(s): rerun with --force to replace it",
                    current.len()
                )));
            }
        }

        if imported.is_empty() {
            warning(format!("{} holds no gear rows.", source.display()));
        }

        if let Some(kept) = store.replace(&imported)? {
            info(format!("Previous store kept as {}", kept.display()));
        }

        success(format!(
            "Imported {} item(s) from {}",
            imported.len(),
            source.display()
        ));
    }

    Ok(())
}
