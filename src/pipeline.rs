//! The combine pipeline: fetch the client jar, stage its assets, stage the
//! texture pack on top, pack the result.
//!
//! Every step runs to completion before the next starts. Scratch space lives
//! in a single [`TempDir`] plus an anonymous temp file for the jar; both are
//! released when they go out of scope, including on early return.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::archive::{ARCHIVE_ROOT, extract_all, pack_assets};
use crate::io::ClientSource;
use crate::merge::{MergeStats, merge_assets};

/// Everything needed for one run
#[derive(Debug, Clone)]
pub struct CombineOptions {
    pub client: ClientSource,
    /// Texture pack applied over the client's assets
    pub pack: PathBuf,
    /// Must not exist yet
    pub output: PathBuf,
    pub quiet: bool,
}

/// What a successful run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineSummary {
    pub jar_bytes: u64,
    pub client: MergeStats,
    pub pack: MergeStats,
    /// Files written to the output archive
    pub packed: usize,
}

#[derive(Debug, Clone, Copy)]
struct Progress {
    quiet: bool,
}

impl Progress {
    fn step(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn begin(&self, message: &str) {
        if !self.quiet {
            print!("{message}...");
            let _ = std::io::stdout().flush();
        }
    }
}

/// Run the whole pipeline.
pub async fn combine(options: &CombineOptions) -> Result<CombineSummary> {
    let progress = Progress { quiet: options.quiet };

    let source = options.client.open()?;
    let work_dir = tempfile::tempdir().context("failed to create scratch directory")?;
    let assets_root = work_dir.path().join("staging").join(ARCHIVE_ROOT);

    progress.begin(&source.describe());
    let mut jar = tokio::fs::File::from_std(tempfile::tempfile()?);
    let jar_bytes = source.fetch_into(&mut jar).await?;
    progress.step(&format!(" Done ({jar_bytes} bytes)"));

    let jar = jar.into_std().await;
    let client = stage_archive(jar, work_dir.path(), &assets_root, progress)
        .await
        .context("failed to stage client jar")?;
    progress.step("Cleaning up Minecraft jar...");

    progress.step("Loading external texture pack...");
    let pack_file = File::open(&options.pack)
        .with_context(|| format!("failed to open texture pack {}", options.pack.display()))?;
    let pack = stage_archive(pack_file, work_dir.path(), &assets_root, progress)
        .await
        .with_context(|| format!("failed to stage texture pack {}", options.pack.display()))?;

    progress.step("Compressing combined pack...");
    let packed = {
        let src = assets_root.clone();
        let dst = options.output.clone();
        tokio::task::spawn_blocking(move || pack_assets(&src, &dst)).await??
    };

    progress.step("Cleaning up...");
    release(work_dir);

    progress.step("Done.");
    Ok(CombineSummary {
        jar_bytes,
        client,
        pack,
        packed,
    })
}

/// Extract `archive` into a fresh scratch directory under `scratch_parent`
/// and merge its asset categories into `assets_root`. The archive handle and
/// the scratch directory are dropped before returning.
async fn stage_archive(
    archive: File,
    scratch_parent: &Path,
    assets_root: &Path,
    progress: Progress,
) -> Result<MergeStats> {
    let scratch_parent = scratch_parent.to_path_buf();
    let assets_root = assets_root.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let scratch = tempfile::tempdir_in(&scratch_parent)?;

        progress.step("Extracting...");
        extract_all(BufReader::new(archive), scratch.path())?;

        progress.step("Copying textures...");
        let stats = merge_assets(scratch.path(), &assets_root)?;
        tracing::debug!(?stats, "merged assets");

        progress.step("Cleaning up extracted files...");
        release(scratch);
        Ok::<_, anyhow::Error>(stats)
    })
    .await?
}

fn release(dir: TempDir) {
    let path = dir.path().to_path_buf();
    if let Err(e) = dir.close() {
        tracing::warn!(path = %path.display(), "failed to remove scratch directory: {e}");
    }
}
