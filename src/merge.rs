//! Selective copying of asset categories into the staging tree.
//!
//! Only three categories are carried over from an extracted archive:
//! `blockstates`, `models` and `textures`. Everything else (sounds, lang
//! files, class files, ...) is ignored. Merging is last-writer-wins: a file
//! copied later replaces the same relative path copied earlier, which is how
//! a texture pack overrides the client's defaults.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Resource namespace the game reads vanilla assets from
pub const NAMESPACE: &str = "minecraft";

/// Asset categories carried from an archive into the staging tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Blockstates,
    Models,
    Textures,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 3] = [
        AssetCategory::Blockstates,
        AssetCategory::Models,
        AssetCategory::Textures,
    ];

    pub fn dir_name(&self) -> &'static str {
        match self {
            AssetCategory::Blockstates => "blockstates",
            AssetCategory::Models => "models",
            AssetCategory::Textures => "textures",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Counters for a single merge pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Regular files written into the staging tree
    pub files: usize,
    /// Existing staging files that were replaced
    pub replaced: usize,
    /// Entries that were neither files nor directories
    pub skipped: usize,
}

/// Copy the asset categories of an extracted archive into a staging asset root.
///
/// `extracted` is the root the archive was unpacked into; categories are read
/// from `extracted/assets/minecraft/<category>`. `assets_root` is the staging
/// tree's `assets` directory; categories land in
/// `assets_root/minecraft/<category>`, which is created even when the
/// archive has nothing to contribute.
pub fn merge_assets(extracted: &Path, assets_root: &Path) -> Result<MergeStats> {
    let src_root = extracted.join("assets").join(NAMESPACE);
    let dst_root = assets_root.join(NAMESPACE);
    let mut stats = MergeStats::default();

    for category in AssetCategory::ALL {
        let dst = dst_root.join(category.dir_name());
        fs::create_dir_all(&dst)
            .with_context(|| format!("failed to create {}", dst.display()))?;

        let src = src_root.join(category.dir_name());
        if !src.is_dir() {
            tracing::info!(%category, "archive has no {}, nothing to copy", src.display());
            continue;
        }

        copy_tree(&src, &dst, Path::new(""), &mut stats)?;
    }

    Ok(stats)
}

/// Recursively copy `src_root/relative` into `dst_root/relative`.
fn copy_tree(src_root: &Path, dst_root: &Path, relative: &Path, stats: &mut MergeStats) -> Result<()> {
    let src_dir = src_root.join(relative);
    let entries = fs::read_dir(&src_dir)
        .with_context(|| format!("failed to list {}", src_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let relative = relative.join(entry.file_name());
        let dst = dst_root.join(&relative);
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            fs::create_dir_all(&dst)
                .with_context(|| format!("failed to create {}", dst.display()))?;
            copy_tree(src_root, dst_root, &relative, stats)?;
        } else if file_type.is_file() {
            if replace_file(&entry.path(), &dst)? {
                stats.replaced += 1;
            }
            stats.files += 1;
        } else {
            tracing::warn!("Ignoring {} (not a file or directory)", dst.display());
            stats.skipped += 1;
        }
    }

    Ok(())
}

/// Atomically replace `dst` with the contents of `src`.
///
/// The bytes are staged in a temporary file next to `dst` and renamed over
/// it, so `dst` is either the old file or the complete new one. Returns
/// whether a file was already present.
fn replace_file(src: &Path, dst: &Path) -> Result<bool> {
    let existed = dst.exists();
    let parent = dst
        .parent()
        .with_context(|| format!("{} has no parent directory", dst.display()))?;

    let mut staged = NamedTempFile::new_in(parent)?;
    let mut input =
        fs::File::open(src).with_context(|| format!("failed to read {}", src.display()))?;
    std::io::copy(&mut input, staged.as_file_mut())?;
    staged
        .persist(dst)
        .with_context(|| format!("failed to write {}", dst.display()))?;

    Ok(existed)
}
