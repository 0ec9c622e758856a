//! Plant image thumbnails
//!
//! Images are downloaded once per URL, decoded and shrunk off the UI thread,
//! and kept for the rest of the session. Cards and the detail modal read
//! from the same cache.

use iced::widget::image::Handle;
use std::collections::HashMap;
use tokio::task;

use crate::api::{CatalogClient, FetchError};

/// Bounding box of generated thumbnails (aspect ratio is kept)
pub const THUMBNAIL_WIDTH: u32 = 400;
pub const THUMBNAIL_HEIGHT: u32 = 240;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThumbnailError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("decode task failed: {0}")]
    Join(String),
}

/// Where a URL stands in the cache
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Pending,
    Ready(Handle),
    Failed,
}

/// Session-wide thumbnail cache keyed by image URL
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: HashMap<String, ThumbnailState>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as pending; returns false if it is empty or already known
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() || self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), ThumbnailState::Pending);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Handle, ThumbnailError>) {
        let state = match result {
            Ok(handle) => ThumbnailState::Ready(handle),
            Err(err) => {
                tracing::warn!(%url, error = %err, "thumbnail unavailable");
                ThumbnailState::Failed
            }
        };
        self.entries.insert(url, state);
    }

    pub fn get(&self, url: &str) -> Option<&ThumbnailState> {
        self.entries.get(url)
    }
}

/// Download and shrink one image
///
/// Returns the URL alongside the result so the caller can key the cache.
pub async fn load_thumbnail(
    client: CatalogClient,
    url: String,
) -> (String, Result<Handle, ThumbnailError>) {
    let result = fetch_and_shrink(&client, &url).await;
    (url, result)
}

async fn fetch_and_shrink(client: &CatalogClient, url: &str) -> Result<Handle, ThumbnailError> {
    let bytes = client.bytes(url).await?;

    // Spawn blocking because decoding and resampling are CPU-bound
    let (width, height, pixels) = task::spawn_blocking(move || shrink_to_rgba(&bytes))
        .await
        .map_err(|e| ThumbnailError::Join(e.to_string()))??;

    tracing::debug!(%url, width, height, "thumbnail ready");
    Ok(Handle::from_rgba(width, height, pixels))
}

/// Decode any supported format and fit it into the thumbnail box
pub fn shrink_to_rgba(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), ThumbnailError> {
    let img = image::load_from_memory(bytes).map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let fitted = if img.width() > THUMBNAIL_WIDTH || img.height() > THUMBNAIL_HEIGHT {
        img.thumbnail(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT)
    } else {
        img
    };

    let rgba = fitted.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::new(width, height))
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_large_image_fits_box() {
        let (w, h, pixels) = shrink_to_rgba(&png(800, 480)).unwrap();
        assert_eq!((w, h), (400, 240));
        assert_eq!(pixels.len(), (w * h * 4) as usize);
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let (w, h, _) = shrink_to_rgba(&png(40, 20)).unwrap();
        assert_eq!((w, h), (40, 20));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = shrink_to_rgba(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ThumbnailError::Decode(_)));
    }

    #[test]
    fn test_cache_requests_each_url_once() {
        let mut cache = ThumbnailCache::new();

        assert!(cache.request("https://img.example/a.png"));
        assert!(!cache.request("https://img.example/a.png"));
        assert!(!cache.request(""));
        assert!(matches!(cache.get("https://img.example/a.png"), Some(ThumbnailState::Pending)));

        cache.finish(
            "https://img.example/a.png".to_string(),
            Err(ThumbnailError::Decode("bad".to_string())),
        );
        assert!(matches!(cache.get("https://img.example/a.png"), Some(ThumbnailState::Failed)));
        // Failed URLs are not retried
        assert!(!cache.request("https://img.example/a.png"));
    }

    #[test]
    fn test_cache_keeps_ready_handle() {
        let mut cache = ThumbnailCache::new();
        cache.request("https://img.example/b.png");
        cache.finish(
            "https://img.example/b.png".to_string(),
            Ok(Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])),
        );
        assert!(matches!(cache.get("https://img.example/b.png"), Some(ThumbnailState::Ready(_))));
    }
}
