use std::time::Duration;

use anyhow::Context;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::media::CachedImage;

/// Used when the CDN leaves the content type out
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Fetches image renditions from the image CDN
#[derive(Debug)]
pub struct CdnClient {
    client: Client,
}

impl CdnClient {
    pub fn new(api_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(api_timeout)
            .build()
            .context("Failed to build http client")?;

        Ok(Self { client })
    }

    #[tracing::instrument(name = "Fetch an image from the CDN", skip(self))]
    pub async fn fetch(&self, url: &str) -> reqwest::Result<CachedImage> {
        let res = self.client.get(url).send().await?.error_for_status()?;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = res.bytes().await?;

        Ok(CachedImage {
            content_type,
            bytes,
        })
    }
}
