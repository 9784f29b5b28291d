use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{info, success};
use crate::utils::date::{DATE_FMT, format_opt, parse_or_today};

/// Mark a track as opened on the given date (default today).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { name, track, date } = cmd {
        //
        // 1. Parse date (default = today)
        //
        let opened_on = parse_or_today(date.as_deref())?;

        //
        // 2. Load, upsert, save
        //
        let mut store = CsvStore::from_config(cfg);
        let mut table = store.load()?;

        let created = table.upsert_by_name(name, *track, opened_on)?;
        store.save(&table)?;

        if created {
            info(format!("'{}' was not in the list: added.", name.trim()));
        }

        let next = table
            .find(name.trim())
            .map(|rec| format_opt(rec.track(*track).next_due()))
            .unwrap_or_default();

        success(format!(
            "{} {} marked as opened on {}. Next open: {}",
            name.trim(),
            track,
            opened_on.format(DATE_FMT),
            next
        ));
    }

    Ok(())
}
