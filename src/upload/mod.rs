mod local;

pub use local::LocalImageStore;

use async_trait::async_trait;
use bytes::Bytes;

/// A file part received in a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

/// An image persisted by an [`ImageStore`].
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub url: String,
    pub key: String,
    /// False when identical content was already stored under the same key.
    pub fresh: bool,
}

/// Persists uploaded images and hands back the URL clients can fetch them from.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, file: &UploadedFile) -> Result<StoredImage, String>;

    /// Undo a `store` whose request failed afterwards. Images that were
    /// already present before that `store` are left in place.
    async fn discard(&self, image: &StoredImage) -> Result<(), String>;
}
