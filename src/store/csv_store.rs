use super::RecordStore;
use super::migrate::read_csv_rows;
use super::row::{COLUMNS, rows_to_table, table_rows};
use super::seed::sample_table;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::GearTable;
use std::fs;
use std::path::{Path, PathBuf};

/// Gear table stored as one CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    seed: bool,
}

struct LoadedTable {
    table: GearTable,
    migrated: bool,
}

impl CsvStore {
    /// A store at `path` that initializes empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: false,
        }
    }

    /// Seed a newly created store with the sample gear list.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.store_path()).with_seed(cfg.seed_sample_data)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a fresh table (sample data or empty) and return it.
    pub fn initialize(&mut self) -> AppResult<GearTable> {
        let table = if self.seed {
            sample_table()
        } else {
            GearTable::new()
        };

        self.save(&table)?;
        tracing::info!(
            path = %self.path.display(),
            rows = table.len(),
            seeded = self.seed,
            "store initialized"
        );
        Ok(table)
    }

    fn read(&self) -> AppResult<LoadedTable> {
        let (layout, rows) = read_csv_rows(&self.path)?;
        Ok(LoadedTable {
            table: rows_to_table(rows),
            migrated: !layout.is_current(),
        })
    }

    /// Move an unreadable store aside so that reinitializing does not destroy it.
    fn quarantine(&self) -> AppResult<PathBuf> {
        let target = free_sibling(&self.path, "corrupt");
        fs::rename(&self.path, &target)?;
        Ok(target)
    }

    /// Copy the current file aside before it is rewritten wholesale.
    fn keep_copy(&self, suffix: &str) -> AppResult<PathBuf> {
        let target = free_sibling(&self.path, suffix);
        fs::copy(&self.path, &target)?;
        Ok(target)
    }

    /// Replace the whole stored table (import). An existing file is copied to
    /// `<store>.pre-import` first; its path is returned.
    pub fn replace(&mut self, table: &GearTable) -> AppResult<Option<PathBuf>> {
        let kept = if self.exists() {
            Some(self.keep_copy("pre-import")?)
        } else {
            None
        };
        self.save(table)?;
        Ok(kept)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl RecordStore for CsvStore {
    fn load(&mut self) -> AppResult<GearTable> {
        if !self.exists() {
            tracing::info!(path = %self.path.display(), "store not found, creating it");
            return self.initialize();
        }

        match self.read() {
            Ok(LoadedTable {
                table,
                migrated: false,
            }) => Ok(table),
            Ok(LoadedTable {
                table,
                migrated: true,
            }) => {
                let kept = self.keep_copy("pre-migration")?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %kept.display(),
                    rows = table.len(),
                    "store uses an older column layout, migrating"
                );
                self.save(&table)?;
                Ok(table)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "store unreadable, reinitializing");
                match self.quarantine() {
                    Ok(moved) => tracing::warn!(backup = %moved.display(), "unreadable store kept"),
                    Err(err) => tracing::warn!(error = %err, "could not keep unreadable store"),
                }
                self.initialize()
            }
        }
    }

    /// Writes to a sibling temp file, syncs it, then renames it over the store.
    fn save(&mut self, table: &GearTable) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        let result = (|| -> AppResult<()> {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp)?;

            wtr.write_record(COLUMNS)?;
            for row in table_rows(table) {
                wtr.serialize(row)?;
            }

            let file = wtr.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
            Ok(())
        })();

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), rows = table.len(), "store saved");
        Ok(())
    }
}

/// `<path>.<suffix>`, or `<path>.<suffix>.N` when that name is already used.
pub(crate) fn free_sibling(path: &Path, suffix: &str) -> PathBuf {
    let with = |extra: &str| {
        let mut name = path.as_os_str().to_owned();
        name.push(format!(".{suffix}{extra}"));
        PathBuf::from(name)
    };

    let first = with("");
    if !first.exists() {
        return first;
    }
    (1..)
        .map(|n| with(&format!(".{n}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}
