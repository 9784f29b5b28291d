use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::remind::{ReminderLogic, SweepOutcome};
use crate::errors::AppResult;
use crate::notify::{DryRunNotifier, SmtpNotifier};
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date::parse_or_today;

/// Run the reminder sweep on demand and email whatever is due.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind { date, dry_run } = cmd {
        let today = parse_or_today(date.as_deref())?;

        let mut store = CsvStore::from_config(cfg);
        let mut table = store.load()?;

        // ---- DRY RUN: print only, store untouched ----
        if *dry_run {
            let outcome = ReminderLogic::sweep_and_notify(&mut table, &DryRunNotifier, today);
            if outcome.due().is_empty() {
                info("No reminders due today.");
            } else {
                info(format!(
                    "Dry run: {} reminder(s) not marked as sent.",
                    outcome.due().len()
                ));
            }
            return Ok(());
        }

        let outcome =
            ReminderLogic::sweep_and_notify_with(&mut table, today, || SmtpNotifier::from_config(cfg));

        if !outcome.due().is_empty() {
            warning("Reminders due:");
            for item in outcome.due() {
                println!("   {}", item.message_line());
            }
        }

        match &outcome {
            SweepOutcome::NothingDue => info("No reminders due today."),
            SweepOutcome::Notified { marked, .. } => {
                if outcome.table_changed() {
                    store.save(&table)?;
                }
                success(format!("Email sent! {marked} reminder(s) marked as sent."));
            }
            SweepOutcome::Failed { error: e, .. } => {
                error(format!("Failed to send email: {e}"));
                info("Reminders were not marked as sent and will be retried.");
            }
        }
    }

    Ok(())
}
