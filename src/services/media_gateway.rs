use async_trait::async_trait;

use crate::error::Result;

/// A hosted image as returned by the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub url: String,
    /// Opaque id the host needs to delete the image later.
    pub external_id: String,
}

/// Upload/delete surface of the external image host.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    /// Uploads a base64 data URI or remote URL into `folder`, unchanged.
    async fn upload(&self, payload: &str, folder: &str) -> Result<UploadedMedia>;

    async fn delete(&self, external_id: &str) -> Result<()>;
}
