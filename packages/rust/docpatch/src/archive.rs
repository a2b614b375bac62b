//! Zip extraction and repackaging for packaged documents.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use munsort_shared::{MunsortError, Result};

/// Fixed internal path of the body-text XML part.
pub const DOCUMENT_XML: &str = "word/document.xml";

/// Extract a packaged document into `dest`.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| MunsortError::io(archive_path, e))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| MunsortError::archive(format!("{}: {e}", archive_path.display())))?;
    archive
        .extract(dest)
        .map_err(|e| MunsortError::archive(format!("extract to {}: {e}", dest.display())))?;
    Ok(())
}

/// Repackage an extracted directory tree into a zip archive at `dest`.
pub fn repack_archive(src_dir: &Path, dest: &Path) -> Result<()> {
    let file = File::create(dest).map_err(|e| MunsortError::io(dest, e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_dir(&mut writer, src_dir, src_dir, options)?;

    writer
        .finish()
        .map_err(|e| MunsortError::archive(format!("finish {}: {e}", dest.display())))?;
    Ok(())
}

fn add_dir(
    writer: &mut ZipWriter<File>,
    root: &Path,
    dir: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
        .map_err(|e| MunsortError::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| MunsortError::io(dir, e))?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();
        let name = path
            .strip_prefix(root)
            .map_err(|e| MunsortError::archive(format!("{}: {e}", path.display())))?
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            writer
                .add_directory(format!("{name}/"), options)
                .map_err(|e| MunsortError::archive(format!("{name}: {e}")))?;
            add_dir(writer, root, &path, options)?;
        } else {
            writer
                .start_file(name.clone(), options)
                .map_err(|e| MunsortError::archive(format!("{name}: {e}")))?;
            let bytes = std::fs::read(&path).map_err(|e| MunsortError::io(&path, e))?;
            writer
                .write_all(&bytes)
                .map_err(|e| MunsortError::io(&path, e))?;
        }
    }

    Ok(())
}
