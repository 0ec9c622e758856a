//! View builders
//!
//! Every function here is a pure projection of application state into
//! widgets; interaction comes back as [`Message`]s.

pub mod cart;
pub mod catalog;
pub mod donation;
pub mod modal;

use iced::widget::{button, center, container, horizontal_space, row, text, Image, Space};
use iced::{Color, Element, Length};

use crate::thumbnail::{ThumbnailCache, ThumbnailState};
use crate::Message;

const ERROR_COLOR: Color = Color { r: 0.70, g: 0.20, b: 0.20, a: 1.0 };
const MUTED_COLOR: Color = Color { r: 0.40, g: 0.40, b: 0.40, a: 1.0 };

/// Inline failure text shown in place of a section
pub fn error_text<'a>(message: &'a str) -> Element<'a, Message> {
    text(message).color(ERROR_COLOR).into()
}

pub fn muted_text<'a>(message: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(message).size(13).color(MUTED_COLOR).into()
}

/// Global loading indicator
pub fn spinner<'a>(visible: bool) -> Element<'a, Message> {
    if visible {
        muted_text("Loading…")
    } else {
        Space::with_width(Length::Shrink).into()
    }
}

/// Acknowledgment banner with a dismiss button
pub fn notice_banner<'a>(notice: Option<&'a str>) -> Element<'a, Message> {
    let Some(notice) = notice else {
        return Space::with_height(Length::Shrink).into();
    };

    container(
        row![
            text(notice),
            horizontal_space(),
            button(text("Dismiss")).style(button::text).on_press(Message::DismissNotice),
        ]
        .align_y(iced::Alignment::Center),
    )
    .padding(10)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

/// Cached thumbnail for `url`, or a placeholder box of the same height
pub fn thumbnail<'a>(cache: &'a ThumbnailCache, url: &str, height: f32) -> Element<'a, Message> {
    let label = match cache.get(url) {
        Some(ThumbnailState::Ready(handle)) => {
            return Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .into();
        }
        Some(ThumbnailState::Pending) => "Loading image…",
        Some(ThumbnailState::Failed) | None => "No Image",
    };

    center(muted_text(label))
        .height(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}
