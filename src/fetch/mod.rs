// SPDX-License-Identifier: MPL-2.0
//! Downloading the remote image in three equivalent concurrency styles.
//!
//! Each style wraps the same two steps: one HTTP GET and one
//! validate-and-decode pass over the response. They only differ in how the
//! result travels back to the caller:
//! - [`ImageLoader::download`] is plain async/await,
//! - [`ImageLoader::download_with_callback`] invokes a completion callback
//!   from a spawned task,
//! - [`ImageLoader::download_stream`] yields the outcome as the single item
//!   of a stream.

use crate::error::{Error, Result};
use crate::media::{self, ImageData};
use futures_util::stream::{self, Stream, StreamExt};
use reqwest::StatusCode;

/// Source of the demo image. A fresh random picture per request.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/200";

/// The three equivalent download styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStyle {
    /// Completion callback invoked from a spawned task.
    Callback,
    /// One-shot stream yielding the outcome as its single item.
    Stream,
    /// Plain async/await.
    #[default]
    AsyncAwait,
}

impl FetchStyle {
    /// All styles, in the order the UI presents them.
    pub const ALL: [FetchStyle; 3] = [
        FetchStyle::Callback,
        FetchStyle::Stream,
        FetchStyle::AsyncAwait,
    ];

    /// Short human-readable name for UI labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FetchStyle::Callback => "Callback",
            FetchStyle::Stream => "Stream",
            FetchStyle::AsyncAwait => "Async/await",
        }
    }
}

/// Downloads the demo image from a fixed URL.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    url: String,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_URL)
    }
}

impl ImageLoader {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Validates the HTTP status and decodes the body.
    ///
    /// Anything but a 2xx status with a decodable body is "no image"; the
    /// decode error itself is discarded.
    #[must_use]
    pub fn handle_response(status: StatusCode, body: &[u8]) -> Option<ImageData> {
        if !status.is_success() {
            return None;
        }

        media::decode_image(body).ok()
    }

    /// Issues the GET request and returns the status with the full body.
    async fn get(&self) -> Result<(StatusCode, Vec<u8>)> {
        // Build client with explicit redirect policy and user agent
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedPeek/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Http(e.to_string()))?;
            body.extend_from_slice(&chunk);
        }

        Ok((status, body))
    }

    /// Structured-async download.
    ///
    /// Transport-level failures are `Err`; a response that fails validation
    /// or decoding is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the client cannot be built, the request
    /// cannot be sent, or the body cannot be read.
    pub async fn download(&self) -> Result<Option<ImageData>> {
        let (status, body) = self.get().await?;
        Ok(Self::handle_response(status, &body))
    }

    /// Completion-callback download.
    ///
    /// Runs [`download`](Self::download) on a spawned task and invokes
    /// `on_complete` exactly once with the result.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn download_with_callback(
        &self,
        on_complete: impl FnOnce(Result<Option<ImageData>>) + Send + 'static,
    ) {
        let loader = self.clone();
        tokio::spawn(async move {
            on_complete(loader.download().await);
        });
    }

    /// Reactive download: a one-shot stream that performs the GET and yields
    /// the outcome as its single item.
    ///
    /// The request stage and the validate/decode stage are separate
    /// combinators, so the item is produced by mapping
    /// [`handle_response`](Self::handle_response) over the raw response.
    pub fn download_stream(&self) -> impl Stream<Item = Result<Option<ImageData>>> + Send {
        let loader = self.clone();

        stream::once(async move { loader.get().await })
            .map(|result| result.map(|(status, body)| Self::handle_response(status, &body)))
    }
}
