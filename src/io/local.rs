use super::JarSource;
use crate::error::ResolveError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Client jar read from the local filesystem
#[derive(Debug)]
pub struct LocalJar {
    path: PathBuf,
}

impl LocalJar {
    /// Look up a jar at `path`, failing with [`ResolveError::NotFound`] when
    /// nothing is there.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        let path = path.into();
        if !path.is_file() {
            return Err(ResolveError::NotFound(path));
        }
        Ok(Self { path })
    }

    /// Locate `versions/{version}/{version}.jar` inside a `.minecraft` directory.
    pub fn from_minecraft_dir(minecraft_dir: &Path, version: &str) -> Result<Self, ResolveError> {
        Self::new(
            minecraft_dir
                .join("versions")
                .join(version)
                .join(format!("{version}.jar")),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JarSource for LocalJar {
    async fn fetch_into(&self, sink: &mut File) -> Result<u64> {
        let mut file = File::open(&self.path)
            .await
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        let copied = tokio::io::copy(&mut file, sink).await?;
        sink.flush().await?;
        tracing::debug!(path = %self.path.display(), bytes = copied, "copied local jar");
        Ok(copied)
    }

    fn describe(&self) -> String {
        format!("Using local client at {}", self.path.display())
    }
}
