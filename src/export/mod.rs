//! Gear table export: CSV and JSON mirror the store columns, XLSX adds styling.

pub(crate) mod excel_date;
mod json_csv;
pub mod logic;
mod xlsx;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}

fn announce_export(format: ExportFormat, path: &Path, rows: usize) {
    success(format!(
        "{} export completed: {} ({rows} item(s))",
        format.label(),
        path.display()
    ));
}
