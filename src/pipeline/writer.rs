use crate::error::{Error, Result};
use crate::resource::Document;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize `doc` to `path`, creating parent folders and overwriting any
/// existing file. The write is not atomic.
pub fn write_document(doc: &Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let xml = doc.to_xml()?;
    fs::write(path, xml).map_err(|e| Error::io(path, e))
}

/// Move an existing output file aside before it is overwritten
///
/// `strings.xml` becomes `strings_old.xml`; if that name is taken, a
/// timestamp is appended (`strings_old_20240131235959.xml`). Returns the
/// backup path, or `None` when there was nothing to back up.
pub fn backup_if_exists(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut backup = path.with_file_name(format!("{}_old{}", stem, extension));
    if backup.exists() {
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        backup = path.with_file_name(format!("{}_old_{}{}", stem, stamp, extension));
    }

    fs::rename(path, &backup).map_err(|e| Error::io(path, e))?;
    Ok(Some(backup))
}
