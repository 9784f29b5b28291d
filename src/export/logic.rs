use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, announce_export};
use crate::models::GearTable;
use crate::store::row::table_rows;
use crate::ui::messages::{info, warning};
use crate::utils::prompt::confirm_overwrite;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole gear table to `file`.
    ///
    /// An existing file is only replaced after confirmation, or with `force`.
    pub fn export(table: &GearTable, format: ExportFormat, file: &Path, force: bool) -> AppResult<()> {
        if !confirm_overwrite(file, force)? {
            return Err(AppError::Export(
                "cancelled: existing file not overwritten".to_string(),
            ));
        }

        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rows = table_rows(table);
        if rows.is_empty() {
            warning("The gear table is empty: exporting headers only.");
        }

        info(format!("Exporting to {}: {}", format.label(), file.display()));
        tracing::debug!(format = format.label(), rows = rows.len(), path = %file.display(), "exporting gear table");

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
            ExportFormat::Xlsx => export_xlsx(&rows, file)?,
        }

        announce_export(format, file, rows.len());
        Ok(())
    }
}
