use crate::errors::AppResult;
use crate::store::row::{COLUMNS, GearRow};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rows as a pretty-printed JSON array, one object per gear.
pub(crate) fn export_json(rows: &[GearRow], path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Same layout as the store file, so an export can be loaded back as a store.
pub(crate) fn export_csv(rows: &[GearRow], path: &Path) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
