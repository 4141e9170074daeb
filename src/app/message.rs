// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::error::Error;
use crate::fetch::FetchStyle;
use crate::media::ImageData;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start a new download using the given style.
    FetchRequested(FetchStyle),
    /// A download finished, in any style.
    ImageFetched(Result<Option<ImageData>, Error>),
}
