use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::absolute_output;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let dest = absolute_output(file, "backup")?;
        BackupLogic::backup(&cfg.store_path(), &dest, *compress)?;
    }

    Ok(())
}
