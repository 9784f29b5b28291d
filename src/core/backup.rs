use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::prompt::confirm_overwrite;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store file to `dest`, optionally compressing it to `.zip`.
    ///
    /// Returns the path of the final backup, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(store: &Path, dest: &Path, compress: bool) -> AppResult<Option<PathBuf>> {
        // 1️⃣ Check store exists
        if !store.exists() {
            return Err(AppError::Store(format!(
                "store not found: {}",
                store.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if !confirm_overwrite(&final_target, false)? {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress
        let final_path = if compress {
            compress_backup(store, &final_target)?
        } else {
            fs::copy(store, dest)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));
        tracing::info!(store = %store.display(), backup = %final_path.display(), compress, "backup written");

        Ok(Some(final_path))
    }
}

/// Write `src` into a single-entry `.zip` archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "gears.csv".to_string());

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
