// SPDX-License-Identifier: MPL-2.0
//! Decoded image data shared between the loader and the UI.

mod image;

pub use image::{decode_image, ImageData};
