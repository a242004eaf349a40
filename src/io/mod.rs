mod http;
mod local;

pub use http::{DEFAULT_DOWNLOAD_BASE, HttpJarDownload, USER_AGENT};
pub use local::LocalJar;

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::File;

/// Trait for anything that can produce the bytes of a client jar
#[async_trait]
pub trait JarSource: Send + Sync {
    /// Append the whole jar to `sink` and return the number of bytes written.
    async fn fetch_into(&self, sink: &mut File) -> Result<u64>;

    /// Progress line shown while fetching
    fn describe(&self) -> String;
}

/// Where the client jar comes from, in order of precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSource {
    /// `versions/{version}/{version}.jar` inside a `.minecraft` directory
    LocalClient { minecraft_dir: PathBuf, version: String },
    /// An explicit jar path
    Jar(PathBuf),
    /// Download `{version}.jar` from `base`
    Download { base: String, version: String },
}

impl ClientSource {
    /// Resolve into a concrete reader. Local jars are checked for existence
    /// here, before any work starts.
    pub fn open(&self) -> Result<Box<dyn JarSource>> {
        let source: Box<dyn JarSource> = match self {
            ClientSource::LocalClient { minecraft_dir, version } => {
                if cfg!(windows) {
                    tracing::warn!(
                        "Automatically finding .minecraft may not work on Windows. You may need to use the -j option instead."
                    );
                }
                Box::new(LocalJar::from_minecraft_dir(minecraft_dir, version)?)
            }
            ClientSource::Jar(path) => Box::new(LocalJar::new(path.clone())?),
            ClientSource::Download { base, version } => Box::new(HttpJarDownload::new(base, version)?),
        };
        Ok(source)
    }
}
