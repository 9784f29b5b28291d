use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the gear store, seeded with the sample list unless `--empty`
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { empty } = &cli.command else {
        return Ok(());
    };

    //
    // 1️⃣ Configuration
    //
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    info("Initializing gearminder…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store       : {}", cfg.store_path().display());

    //
    // 2️⃣ Store: an existing one is loaded (and migrated if needed), never replaced
    //
    let mut store = CsvStore::from_config(&cfg).with_seed(cfg.seed_sample_data && !*empty);

    if store.exists() {
        let table = store.load()?;
        warning(format!(
            "Store already exists with {} item(s): left as is.",
            table.len()
        ));
    } else {
        let table = store.initialize()?;
        success(format!("Store created with {} item(s).", table.len()));
    }

    if cfg.email_from.is_none() || cfg.email_to.is_none() {
        info("Set email_from / email_to (config --edit) and GEARMINDER_SMTP_PASSWORD to enable reminder emails.");
    }

    success("gearminder initialization completed!");
    Ok(())
}
