// SPDX-License-Identifier: MPL-2.0
//! Image loading for card thumbnails and the preview surface snapshot.
//!
//! References are either `http(s)` URLs (fetched with `reqwest`) or local
//! paths. Decoded images are kept in an LRU cache keyed by reference so
//! re-opening a project never re-fetches.

use crate::error::Result;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;

/// Decoded images kept around at once. Thumbnails are small; the preview
/// snapshot dominates, so a few dozen entries is plenty for a catalog of
/// this size.
const CACHE_CAPACITY: usize = 32;

/// A decoded image ready for the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Loads and decodes the image behind `reference`.
pub async fn load_image(reference: &str) -> Result<ImageData> {
    let bytes = fetch_bytes(reference).await?;
    decode(&bytes)
}

async fn fetch_bytes(reference: &str) -> Result<Vec<u8>> {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        let response = reqwest::get(reference).await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(std::fs::read(Path::new(reference))?)
    }
}

fn decode(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// LRU cache of decoded images, keyed by their reference string.
pub struct Cache {
    entries: LruCache<String, ImageData>,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: LruCache::new(
                NonZeroUsize::new(CACHE_CAPACITY).expect("capacity is non-zero"),
            ),
        }
    }

    pub fn put(&mut self, reference: String, image: ImageData) {
        self.entries.put(reference, image);
    }

    pub fn get(&mut self, reference: &str) -> Option<&ImageData> {
        self.entries.get(reference)
    }

    /// Read-only lookup that does not refresh recency, for use in `view()`.
    #[must_use]
    pub fn peek(&self, reference: &str) -> Option<&ImageData> {
        self.entries.peek(reference)
    }
}
