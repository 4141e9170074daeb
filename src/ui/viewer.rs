// SPDX-License-Identifier: MPL-2.0
//! Viewer pane: the fetched image, an empty-state hint, and fetch controls.

use crate::app::Message;
use crate::fetch::FetchStyle;
use crate::media::ImageData;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, Element, Length};

/// Displayed frame for the fetched picture.
const IMAGE_FRAME: f32 = 250.0;

/// Context required to render the viewer.
pub struct ViewContext<'a> {
    pub image: Option<&'a ImageData>,
    pub is_loading: bool,
    pub style: FetchStyle,
}

/// Renders the viewer pane.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = if ctx.is_loading {
        loading_view(ctx.style)
    } else if let Some(image) = ctx.image {
        image_view(image)
    } else {
        empty_view()
    };

    let column = Column::new()
        .spacing(16)
        .align_x(alignment::Horizontal::Center)
        .push(style_buttons(ctx.is_loading))
        .push(
            Container::new(content)
                .width(Length::Fixed(IMAGE_FRAME))
                .height(Length::Fixed(IMAGE_FRAME))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// One button per fetch style. Buttons are inert while a download is
/// outstanding, so only a single request can be in flight.
fn style_buttons(is_loading: bool) -> Element<'static, Message> {
    let mut row = Row::new().spacing(10).padding(10);

    for style in FetchStyle::ALL {
        let mut fetch_button = button(Text::new(style.label()));
        if !is_loading {
            fetch_button = fetch_button.on_press(Message::FetchRequested(style));
        }
        row = row.push(fetch_button);
    }

    row.into()
}

fn image_view(image_data: &ImageData) -> Element<'_, Message> {
    Image::new(image_data.handle.clone())
        .width(Length::Fixed(IMAGE_FRAME))
        .height(Length::Fixed(IMAGE_FRAME))
        .into()
}

fn empty_view() -> Element<'static, Message> {
    let title = Text::new("No image loaded").size(20);
    let subtitle = Text::new("Pick a fetch style above to download one").size(14);

    Column::new()
        .spacing(8)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .into()
}

fn loading_view(style: FetchStyle) -> Element<'static, Message> {
    Text::new(format!("Downloading via {}...", style.label())).into()
}
