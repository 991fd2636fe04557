use std::path::PathBuf;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::{ImageStore, StoredImage, UploadedFile};

/// Stores images on local disk under content-addressed names.
///
/// Files are served back by the app at `/uploads`, so the returned URL is
/// `{base_url}/uploads/{sha256}.{ext}`.
pub struct LocalImageStore {
    dir: PathBuf,
    base_url: String,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, file: &UploadedFile) -> Result<StoredImage, String> {
        if file.data.is_empty() {
            return Err("Image file is empty".to_string());
        }
        if !file.is_image() {
            return Err(format!(
                "Unsupported content type: {}",
                file.content_type.as_deref().unwrap_or("unknown")
            ));
        }

        let name = format!("{}.{}", hex::encode(Sha256::digest(&file.data)), extension(file));

        let path = self.dir.join(&name);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| format!("Failed to create upload directory: {e}"))?;

        // Same name means same bytes, so an existing file is reused as is.
        let fresh = !tokio::fs::try_exists(&path)
            .await
            .map_err(|e| format!("Failed to inspect upload directory: {e}"))?;
        if fresh {
            tokio::fs::write(&path, &file.data)
                .await
                .map_err(|e| format!("Failed to write image: {e}"))?;
            tracing::debug!("Stored image {name} ({} bytes)", file.data.len());
        }

        Ok(StoredImage {
            url: format!("{}/uploads/{name}", self.base_url),
            key: name,
            fresh,
        })
    }

    async fn discard(&self, image: &StoredImage) -> Result<(), String> {
        if !image.fresh {
            return Ok(());
        }
        tokio::fs::remove_file(self.dir.join(&image.key))
            .await
            .map_err(|e| format!("Failed to remove image {}: {e}", image.key))
    }
}

fn extension(file: &UploadedFile) -> String {
    let from_name = file
        .file_name
        .as_deref()
        .and_then(|n| n.rsplit_once('.'))
        .map(|(_, ext)| ext);
    let from_type = file
        .content_type
        .as_deref()
        .and_then(|ct| ct.split_once('/'))
        .map(|(_, sub)| sub);

    [from_name, from_type]
        .into_iter()
        .flatten()
        .find(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}
