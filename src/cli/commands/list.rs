use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::due_sweep;
use crate::errors::AppResult;
use crate::models::{EquipmentRecord, Track};
use crate::store::{CsvStore, RecordStore};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_reminder};
use crate::utils::date::{format_opt, parse_or_today};
use crate::utils::table::{Column, Table};
use std::collections::HashSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { due, date } = cmd {
        let mut store = CsvStore::from_config(cfg);
        let table = store.load()?;

        let records: Vec<&EquipmentRecord> = if *due {
            let today = parse_or_today(date.as_deref())?;
            let rows: HashSet<usize> = due_sweep(&table, today).into_iter().map(|d| d.row).collect();
            header(format!("Gear due on {today}"));
            table
                .records()
                .iter()
                .enumerate()
                .filter(|(i, _)| rows.contains(i))
                .map(|(_, r)| r)
                .collect()
        } else {
            header("All gear");
            table.records().iter().collect()
        };

        if records.is_empty() {
            info("No gear to show.");
            return Ok(());
        }

        println!("{}", render(&records));
        println!("{} item(s)", records.len());
    }
    Ok(())
}

fn render(records: &[&EquipmentRecord]) -> String {
    let name_w = records
        .iter()
        .map(|r| unicode_width::UnicodeWidthStr::width(r.name.as_str()))
        .max()
        .unwrap_or(4)
        .max(4);

    let mut columns = vec![Column::new("Gear", name_w)];
    for track in Track::ALL {
        columns.push(Column::new(format!("{track} opened"), 11));
        columns.push(Column::new(format!("{track} next"), 10));
        columns.push(Column::new(format!("{track} sent"), 9));
    }

    let mut out = Table::new(columns);
    for rec in records {
        let mut row = vec![rec.name.clone()];
        for track in Track::ALL {
            let state = rec.track(track);
            row.push(colorize_optional(&format_opt(state.last_opened())));
            row.push(colorize_optional(&format_opt(state.next_due())));
            row.push(colorize_reminder(state.reminder()));
        }
        out.add_row(row);
    }

    out.render()
}
