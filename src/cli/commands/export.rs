use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{CsvStore, RecordStore};
use crate::utils::path::absolute_output;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let out = absolute_output(file, "output file")?;

        let mut store = CsvStore::from_config(cfg);
        let table = store.load()?;
        ExportLogic::export(&table, *format, &out, *force)?;
    }
    Ok(())
}
