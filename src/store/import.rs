//! One-off import of a gear list kept elsewhere: the `.xlsx` workbook of the
//! spreadsheet-based tracker, or a CSV in any recognised layout.

use super::migrate::{ColumnLayout, is_blank, read_csv_rows};
use super::row::{GearRow, rows_to_table};
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::excel_serial_to_date;
use crate::models::GearTable;
use crate::utils::date::DATE_FMT;
use calamine::{Data, Reader, Xlsx, open_workbook};
use csv::StringRecord;
use std::path::Path;

/// Read every row of `path`, picking the reader from the file extension.
pub fn read_legacy_rows(path: &Path) -> AppResult<Vec<GearRow>> {
    if !path.exists() {
        return Err(AppError::Store(format!(
            "import file not found: {}",
            path.display()
        )));
    }

    let is_workbook = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "xlsx" | "xlsm"));

    if is_workbook {
        read_xlsx_rows(path)
    } else {
        read_csv_rows(path).map(|(_, rows)| rows)
    }
}

/// Read `path` into a table, one record per non-blank row.
pub fn import_table(path: &Path) -> AppResult<GearTable> {
    let rows = read_legacy_rows(path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "gear list read for import");
    Ok(rows_to_table(rows))
}

/// First worksheet only; its first row is the header.
fn read_xlsx_rows(path: &Path) -> AppResult<Vec<GearRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(to_store_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Store(format!("{} has no worksheet", path.display())))?
        .map_err(to_store_error)?;

    let mut rows = range.rows().map(to_record);
    let headers = rows
        .next()
        .ok_or_else(|| AppError::Store(format!("{} is empty", path.display())))?;
    let layout = ColumnLayout::detect(&headers)
        .ok_or_else(|| AppError::Store("no equipment name column in header".into()))?;

    Ok(rows
        .filter(|record| !is_blank(record))
        .map(|record| layout.row_from(&record))
        .collect())
}

fn to_record(cells: &[Data]) -> StringRecord {
    cells.iter().map(cell_text).collect()
}

/// Cell as the text the store would hold. Date cells become `YYYY-MM-DD`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(|d| d.format(DATE_FMT).to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

fn to_store_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Store(e.to_string())
}
