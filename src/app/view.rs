// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::viewer;
use iced::Element;

/// Renders the application view from the current state.
pub fn view(app: &App) -> Element<'_, Message> {
    viewer::view(viewer::ViewContext {
        image: app.image.as_ref(),
        is_loading: app.is_loading,
        style: app.style,
    })
}
