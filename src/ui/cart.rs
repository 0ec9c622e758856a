use iced::widget::{
    button, column, horizontal_rule, horizontal_space, row, scrollable, text, Column,
};
use iced::{Alignment, Element, Length};

use super::muted_text;
use crate::state::cart::{Cart, CartLine};
use crate::state::data::format_price;
use crate::Message;

const PANEL_WIDTH: f32 = 280.0;

fn cart_row<'a>(line: &'a CartLine, currency: &str) -> Element<'a, Message> {
    row![
        column![
            text(&line.name),
            muted_text(format!("x{} • {}", line.quantity, format_price(currency, line.price))),
        ]
        .spacing(2),
        horizontal_space(),
        button(text("Remove"))
            .style(button::danger)
            .on_press(Message::RemoveFromCart(line.id.clone())),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Cart lines and the running total
pub fn cart_panel<'a>(cart: &'a Cart, currency: &str) -> Element<'a, Message> {
    let lines: Element<Message> = if cart.is_empty() {
        muted_text("No items yet")
    } else {
        scrollable(
            Column::with_children(cart.lines().iter().map(|line| cart_row(line, currency)))
                .spacing(10),
        )
        .into()
    };

    column![
        text(format!("Your Cart ({})", cart.len())).size(20),
        lines,
        horizontal_rule(1),
        row![
            text("Total:"),
            horizontal_space(),
            text(format_price(currency, cart.total())).size(18),
        ],
    ]
    .spacing(12)
    .width(Length::Fixed(PANEL_WIDTH))
    .into()
}
