use std::io::{Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use zip::ZipArchive;

/// Extract every entry of a zip archive into `dest`, keeping relative paths.
///
/// No filtering happens here; selection is the merger's job. Entries whose
/// names would escape `dest` are rejected by the zip reader.
///
/// Returns the number of entries in the archive.
pub fn extract_all<R: Read + Seek>(reader: R, dest: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(reader).context("not a valid zip archive")?;
    let entries = archive.len();

    archive
        .extract(dest)
        .with_context(|| format!("failed to extract archive into {}", dest.display()))?;

    tracing::debug!(entries, dest = %dest.display(), "extracted archive");
    Ok(entries)
}
