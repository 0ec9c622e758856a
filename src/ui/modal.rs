//! Plant detail overlay
//!
//! Clicking the dimmed backdrop closes the modal; the content area is
//! opaque so clicks inside it never reach the backdrop.

use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
};
use iced::{Color, Element, Length};

use super::{error_text, muted_text, thumbnail};
use crate::state::data::format_price;
use crate::state::modal::{DetailModal, ModalContent};
use crate::thumbnail::ThumbnailCache;
use crate::Message;

const MODAL_WIDTH: f32 = 560.0;
const MODAL_IMAGE_HEIGHT: f32 = 240.0;

fn body<'a>(
    content: &'a ModalContent,
    thumbnails: &'a ThumbnailCache,
    currency: &str,
) -> Element<'a, Message> {
    match content {
        ModalContent::NoDetails => text("No details available").into(),
        ModalContent::Loading => muted_text("Loading details…"),
        ModalContent::Unavailable => text("Details not available.").into(),
        ModalContent::Failed => error_text("Failed to load details."),
        ModalContent::Loaded(detail) => column![
            thumbnail(thumbnails, &detail.image_url, MODAL_IMAGE_HEIGHT),
            text(&detail.name).size(26),
            muted_text(detail.category.as_str()),
            text(format_price(currency, detail.price)).size(18),
            button(text("Add to Cart"))
                .padding([8, 12])
                .style(button::success)
                .on_press(Message::AddFromModal),
            text(&detail.description).size(14),
        ]
        .spacing(10)
        .into(),
    }
}

/// Stack the modal over `base` when it is open
pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    modal: &'a DetailModal,
    thumbnails: &'a ThumbnailCache,
    currency: &str,
) -> Element<'a, Message> {
    let Some(content) = modal.content() else {
        return base.into();
    };

    let close = row![
        horizontal_space(),
        button(text("Close")).style(button::secondary).on_press(Message::CloseModal),
    ];

    let dialog = container(column![close, body(content, thumbnails, currency)].spacing(8))
        .padding(20)
        .width(Length::Fixed(MODAL_WIDTH))
        .style(container::rounded_box);

    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.6,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(Message::CloseModal)
        )
    ]
    .into()
}
