use std::fs::{File, OpenOptions};
use std::io::{Seek, Write};
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Every entry of a packed archive lives under this directory
pub const ARCHIVE_ROOT: &str = "assets";

/// Pack every regular file below `src` into a new archive at `dst`.
///
/// Entry names are `assets/<path relative to src>` with `/` separators, in
/// sorted order. `dst` is created exclusively: if anything already exists
/// there the call fails and leaves it untouched. If writing fails after the
/// file was created, the incomplete archive is removed.
///
/// Returns the number of files written.
pub fn pack_assets(src: &Path, dst: &Path) -> Result<usize> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dst)
        .with_context(|| format!("cannot create output archive {}", dst.display()))?;

    match write_tree(file, src) {
        Ok(count) => Ok(count),
        Err(e) => {
            if let Err(cleanup) = std::fs::remove_file(dst) {
                tracing::warn!(path = %dst.display(), "failed to remove incomplete archive: {cleanup}");
            }
            Err(e)
        }
    }
}

fn write_tree<W: Write + Seek>(writer: W, src: &Path) -> Result<usize> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(src)?;
        let name = format!(
            "{ARCHIVE_ROOT}/{}",
            relative.to_string_lossy().replace('\\', "/")
        );

        zip.start_file(name, options)?;
        let mut file = File::open(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        std::io::copy(&mut file, &mut zip)?;
        count += 1;
    }

    zip.finish()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::extract_all;
    use std::fs;
    use zip::ZipArchive;

    fn entry_names(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn roots_entries_under_assets() {
        let src = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("minecraft/textures/block")).unwrap();
        fs::create_dir_all(src.path().join("minecraft/models")).unwrap();
        fs::write(src.path().join("minecraft/textures/block/dirt.png"), b"dirt").unwrap();

        let out = tempfile::tempdir().unwrap();
        let dst = out.path().join("pack.zip");
        assert_eq!(pack_assets(src.path(), &dst).unwrap(), 1);

        assert_eq!(
            entry_names(&dst),
            vec!["assets/minecraft/textures/block/dirt.png".to_string()]
        );
    }

    #[test]
    fn refuses_to_overwrite_existing_output() {
        let src = tempfile::tempdir().unwrap();
        fs::write(src.path().join("a.txt"), b"new").unwrap();

        let out = tempfile::tempdir().unwrap();
        let dst = out.path().join("pack.zip");
        fs::write(&dst, b"precious").unwrap();

        let err = pack_assets(src.path(), &dst).unwrap_err();
        assert!(err.to_string().contains("cannot create output archive"));
        assert_eq!(fs::read(&dst).unwrap(), b"precious");
    }

    #[test]
    fn missing_source_leaves_no_output() {
        let out = tempfile::tempdir().unwrap();
        let dst = out.path().join("pack.zip");

        assert!(pack_assets(&out.path().join("nope"), &dst).is_err());
        assert!(!dst.exists());
    }

    #[test]
    fn extract_then_pack_preserves_bytes() {
        let tree = tempfile::tempdir().unwrap();
        let files: &[(&str, &[u8])] = &[
            ("minecraft/blockstates/stone.json", b"{\"variants\":{}}"),
            ("minecraft/textures/item/apple.png", &[0x89, b'P', b'N', b'G', 0, 255, 7]),
            ("minecraft/models/empty.json", b""),
        ];
        for (path, bytes) in files {
            let path = tree.path().join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, bytes).unwrap();
        }

        let out = tempfile::tempdir().unwrap();
        let first = out.path().join("first.zip");
        pack_assets(tree.path(), &first).unwrap();

        let unpacked = tempfile::tempdir().unwrap();
        extract_all(File::open(&first).unwrap(), unpacked.path()).unwrap();
        for (path, bytes) in files {
            let got = fs::read(unpacked.path().join(ARCHIVE_ROOT).join(path)).unwrap();
            assert_eq!(&got, bytes, "{path}");
        }

        let second = out.path().join("second.zip");
        pack_assets(&unpacked.path().join(ARCHIVE_ROOT), &second).unwrap();
        assert_eq!(entry_names(&first), entry_names(&second));
    }
}
