use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the storage file to `dest_file`, optionally zip-compressing it.
    /// Returns the path of the final backup file.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1️⃣ Check storage exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Storage file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_target, force)?;

        // 4️⃣ Copy storage (to a staging file when compressing)
        let staging = if compress {
            dest.with_extension("copy")
        } else {
            dest.to_path_buf()
        };
        fs::copy(src, &staging)?;
        debug!(src = %src.display(), dest = %staging.display(), "storage copied");

        if !compress {
            success(format!("Backup created: {}", staging.display()));
            return Ok(staging);
        }

        // 5️⃣ Compression
        compress_backup(&staging, &final_target, src)?;
        if let Err(e) = fs::remove_file(&staging) {
            warning(format!("Failed to remove uncompressed backup: {}", e));
        }

        success(format!("Backup created: {}", final_target.display()));
        Ok(final_target)
    }
}

/// Compress `path` into the zip archive `zip_path`, naming the entry after
/// the original storage file.
fn compress_backup(path: &Path, zip_path: &Path, original: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = original
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rattendance.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
