// SPDX-License-Identifier: MPL-2.0
//! Update logic: translating messages into state changes and fetch tasks.

use super::{App, Message};
use crate::error::Error;
use crate::fetch::FetchStyle;
use crate::media::ImageData;
use futures_util::StreamExt;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::FetchRequested(style) => handle_fetch_requested(app, style),
        Message::ImageFetched(result) => handle_image_fetched(app, result),
    }
}

/// Starts a download with the requested style.
///
/// A single request may be outstanding at a time; requests made while one is
/// in flight are ignored.
pub fn handle_fetch_requested(app: &mut App, style: FetchStyle) -> Task<Message> {
    if app.is_loading {
        return Task::none();
    }

    app.is_loading = true;
    app.style = style;
    log::debug!("fetching {} via {}", app.loader.url(), style.label());

    let loader = app.loader.clone();
    match style {
        FetchStyle::AsyncAwait => Task::perform(
            async move { loader.download().await },
            Message::ImageFetched,
        ),
        FetchStyle::Stream => Task::stream(loader.download_stream().map(Message::ImageFetched)),
        FetchStyle::Callback => {
            use iced::futures::channel::oneshot;

            // Bridge the completion callback into the message loop.
            let (result_tx, result_rx) = oneshot::channel();
            loader.download_with_callback(move |result| {
                let _ = result_tx.send(result);
            });

            Task::perform(
                async move {
                    result_rx
                        .await
                        .unwrap_or_else(|_| Err(Error::Task("download task dropped".into())))
                },
                Message::ImageFetched,
            )
        }
    }
}

/// Stores the downloaded image, collapsing every failure to "no image".
fn handle_image_fetched(app: &mut App, result: Result<Option<ImageData>, Error>) -> Task<Message> {
    app.is_loading = false;
    app.image = match result {
        Ok(image) => image,
        Err(err) => {
            log::warn!("image fetch failed: {err}");
            None
        }
    };

    Task::none()
}
