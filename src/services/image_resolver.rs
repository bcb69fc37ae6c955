use crate::config::StorageConfig;
use crate::error::DashboardError;
use crate::services::storage::{redacted, ObjectFetcher, UrlSigner};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Fill the `{assign_class}` and `{file_attachment_id}` placeholders of a key template
pub fn image_key(template: &str, file_attachment_id: &str, assign_class: &str) -> String {
    template
        .replace("{assign_class}", assign_class)
        .replace("{file_attachment_id}", file_attachment_id)
}

/// Maps a row's identifier and class to a signed image link
#[derive(Debug, Clone)]
pub struct ImageResolver {
    bucket: String,
    template: String,
    ttl: Duration,
}

impl ImageResolver {
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            bucket: storage.bucket.clone(),
            template: storage.image_key_template.clone(),
            ttl: Duration::from_secs(storage.url_ttl_secs),
        }
    }

    pub fn key_for(&self, file_attachment_id: &str, assign_class: &str) -> String {
        image_key(&self.template, file_attachment_id, assign_class)
    }

    /// Sign the image object for a row. The object is not checked for existence:
    /// a missing image only shows up when the link is downloaded.
    pub fn resolve_image(
        &self,
        signer: &dyn UrlSigner,
        file_attachment_id: &str,
        assign_class: &str,
    ) -> Result<Url, DashboardError> {
        let key = self.key_for(file_attachment_id, assign_class);
        let url = signer.sign(&self.bucket, &key, self.ttl).map_err(|e| {
            warn!(key = %key, "Image URL not signed: {e}");
            e
        })?;
        debug!(key = %key, url = %redacted(&url), "Resolved image");
        Ok(url)
    }
}

/// Download and decode the image behind `url`
pub fn fetch_image(fetcher: &dyn ObjectFetcher, url: &Url) -> Result<image::RgbImage, String> {
    let bytes = fetcher.fetch(url).map_err(|e| e.to_string())?;
    image::load_from_memory(&bytes)
        .map(|img| img.to_rgb8())
        .map_err(|e| format!("Could not decode image: {e}"))
}
