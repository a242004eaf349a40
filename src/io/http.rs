use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::JarSource;
use crate::error::ResolveError;
use anyhow::Result;

/// Mojang's legacy download host for client jars
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://s3.amazonaws.com/Minecraft.Download";

/// The download host rejects clients that do not look like a browser
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/52.0.2743.116 Safari/537.36";

/// Client jar fetched over HTTP(S)
pub struct HttpJarDownload {
    client: Client,
    version: String,
    url: String,
}

impl HttpJarDownload {
    /// Prepare a download of `{base}/versions/{version}/{version}.jar`
    pub fn new(base: &str, version: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        let url = format!(
            "{}/versions/{version}/{version}.jar",
            base.trim_end_matches('/')
        );

        Ok(Self {
            client,
            version: version.to_string(),
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JarSource for HttpJarDownload {
    async fn fetch_into(&self, sink: &mut File) -> Result<u64> {
        tracing::debug!(url = %self.url, "requesting client jar");
        let mut resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            return Err(ResolveError::HttpStatus(resp.status().as_u16()).into());
        }

        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await? {
            sink.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        sink.flush().await?;

        Ok(written)
    }

    fn describe(&self) -> String {
        format!("Downloading Minecraft {}", self.version)
    }
}
