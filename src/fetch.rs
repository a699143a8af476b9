//! Photo byte resolver
//!
//! Rebuilds a fetch URL from the photo filename and tries the
//! same-origin proxy first, then remote storage. Both failing resolves
//! to `None`; the slot is skipped silently and nothing is retried.

use defect_report_common::export::{sniff_image_extension, ImageData};
use reqwest::Client;

pub struct PhotoFetcher {
    client: Client,
    proxy_base: String,
    remote_base: String,
}

impl PhotoFetcher {
    pub fn new(client: Client, proxy_base: &str, remote_base: &str) -> Self {
        Self {
            client,
            proxy_base: proxy_base.to_string(),
            remote_base: remote_base.to_string(),
        }
    }

    /// Resolve one photo to bytes, or `None` when every base fails.
    pub async fn fetch(&self, filename: &str) -> Option<ImageData> {
        for base in [&self.proxy_base, &self.remote_base] {
            if base.is_empty() {
                continue;
            }
            if let Some(image) = self.try_fetch(base, filename).await {
                return Some(image);
            }
        }
        None
    }

    /// `GET {base}?name={filename}`, filename percent-encoded.
    async fn try_fetch(&self, base: &str, filename: &str) -> Option<ImageData> {
        let response = self
            .client
            .get(base)
            .query(&[("name", filename)])
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            return None;
        }
        let bytes = response.bytes().await.ok()?;
        if bytes.is_empty() {
            return None;
        }
        Some(ImageData {
            extension: sniff_image_extension(&bytes).to_string(),
            data: bytes.to_vec(),
        })
    }
}
