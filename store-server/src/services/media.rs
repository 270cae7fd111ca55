//! Review image storage.
//!
//! Uploads land under `work_dir/media`, named by the SHA-256 of their
//! bytes so the same file uploaded twice occupies one slot on disk.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::utils::{AppError, AppResult};

/// Upload ceiling, 5 MB.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Where a stored image ended up.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub filename: String,
    pub url: String,
    pub mime_type: String,
    pub size: usize,
}

pub struct MediaStore {
    media_dir: PathBuf,
}

impl MediaStore {
    pub fn new(media_dir: PathBuf) -> Self {
        Self { media_dir }
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Validate and persist an uploaded image. The original filename only
    /// contributes its extension; the stored name is content-addressed.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<StoredImage> {
        if bytes.is_empty() {
            return Err(AppError::invalid("Uploaded file is empty"));
        }
        if bytes.len() > MAX_FILE_SIZE {
            return Err(AppError::invalid(format!(
                "File exceeds the {} MB upload limit",
                MAX_FILE_SIZE / (1024 * 1024)
            )));
        }

        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| AppError::invalid("File has no extension"))?;
        if !SUPPORTED_FORMATS.contains(&extension.as_str()) {
            return Err(AppError::invalid(format!(
                "Unsupported image format '{extension}', expected one of: {}",
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        // Decode to confirm the bytes really are an image, not just a
        // renamed blob.
        image::load_from_memory(bytes)
            .map_err(|e| AppError::invalid(format!("Invalid image file: {e}")))?;

        let digest = hex::encode(Sha256::digest(bytes));
        let filename = format!("{digest}.{extension}");
        let path = self.media_dir.join(&filename);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(%filename, "media file already stored, reusing");
        } else {
            tokio::fs::create_dir_all(&self.media_dir)
                .await
                .map_err(|e| AppError::internal(format!("Failed to create media dir: {e}")))?;
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write media file: {e}")))?;
        }

        let mime_type = mime_guess::from_path(&filename)
            .first_or_octet_stream()
            .to_string();

        Ok(StoredImage {
            url: format!("/media/{filename}"),
            filename,
            mime_type,
            size: bytes.len(),
        })
    }

    /// Resolve a stored filename to its on-disk path. Rejects anything
    /// that would escape the media directory.
    pub fn resolve(&self, filename: &str) -> AppResult<PathBuf> {
        if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
            return Err(AppError::invalid("Invalid media filename"));
        }
        Ok(self.media_dir.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 30, 30, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn stores_valid_png_under_content_hash() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_path_buf());
        let bytes = png_bytes();

        let stored = store.save("photo.png", &bytes).await.unwrap();
        assert!(stored.filename.ends_with(".png"));
        assert_eq!(stored.url, format!("/media/{}", stored.filename));
        assert_eq!(stored.mime_type, "image/png");
        assert!(dir.path().join(&stored.filename).exists());

        // Same bytes, same slot.
        let again = store.save("other-name.png", &bytes).await.unwrap();
        assert_eq!(again.filename, stored.filename);
    }

    #[tokio::test]
    async fn rejects_non_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_path_buf());
        let err = store.save("fake.png", b"definitely not a png").await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn rejects_unsupported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_path_buf());
        let err = store.save("document.pdf", &png_bytes()).await;
        assert!(err.is_err());
    }

    #[test]
    fn resolve_blocks_path_traversal() {
        let store = MediaStore::new(PathBuf::from("/tmp/media"));
        assert!(store.resolve("../etc/passwd").is_err());
        assert!(store.resolve("a/b.png").is_err());
        assert!(store.resolve("abc123.png").is_ok());
    }
}
