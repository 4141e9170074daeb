// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced run loop.
//!
//! The `App` struct is the observable view-model of the demo: it owns the
//! loader and the current image, and translates messages into fetch tasks.
//! Every fetch style finishes by re-entering `update`, so display state is
//! only ever mutated on the update context.

mod message;
mod update;
mod view;

pub use message::Message;

use crate::fetch::{FetchStyle, ImageLoader};
use crate::media::ImageData;
use iced::{window, Element, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state holding the fetched image.
#[derive(Debug, Default)]
pub struct App {
    loader: ImageLoader,
    image: Option<ImageData>,
    style: FetchStyle,
    is_loading: bool,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and kicks off the first download, once
    /// per appearance of the view.
    fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();
        let task = update::handle_fetch_requested(&mut app, FetchStyle::default());
        (app, task)
    }

    fn title(&self) -> String {
        match &self.image {
            Some(image) => format!("{}x{} - Iced Peek", image.width, image.height),
            None => String::from("Iced Peek"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Currently displayed image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Whether a download is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The style used for the most recent fetch.
    #[must_use]
    pub fn style(&self) -> FetchStyle {
        self.style
    }
}
