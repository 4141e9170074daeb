// SPDX-License-Identifier: MPL-2.0
//! Image decoding from downloaded bytes (PNG, JPEG, GIF, WebP, BMP).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::sync::Arc;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA bytes. Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the decoded RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Decodes an encoded image body into RGBA pixel data.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image format.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
