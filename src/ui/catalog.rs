use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{error_text, muted_text, thumbnail};
use crate::state::catalog::{Catalog, CategoryEntry, GridView, Loadable, NO_PLANTS_MESSAGE};
use crate::state::data::{format_price, PlantSummary};
use crate::thumbnail::ThumbnailCache;
use crate::Message;

/// Width of one card in the grid
const CARD_WIDTH: f32 = 260.0;
const CARD_IMAGE_HEIGHT: f32 = 150.0;
const SIDEBAR_WIDTH: f32 = 200.0;

fn category_button(entry: CategoryEntry<'_>) -> Element<'_, Message> {
    let style = if entry.active { button::primary } else { button::secondary };
    button(text(entry.label))
        .width(Length::Fill)
        .padding(8)
        .style(style)
        .on_press(Message::SelectCategory(entry.selection))
        .into()
}

/// Category sidebar: synthetic "All Trees" first, then the fetched list
pub fn category_bar(catalog: &Catalog) -> Element<Message> {
    let body: Element<Message> = match &catalog.categories {
        Loadable::Idle | Loadable::Loading => muted_text("Loading categories…"),
        Loadable::Failed(message) => error_text(message),
        Loadable::Loaded(_) => {
            let buttons = catalog.category_entries().into_iter().map(category_button);
            scrollable(Column::with_children(buttons).spacing(6)).into()
        }
    };

    column![text("Categories").size(20), body]
        .spacing(12)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .into()
}

fn plant_card<'a>(
    plant: &'a PlantSummary,
    thumbnails: &'a ThumbnailCache,
    currency: &str,
) -> Element<'a, Message> {
    let name = button(text(&plant.name).size(18))
        .padding(0)
        .style(button::text)
        .on_press(Message::OpenDetail(plant.id.clone()));

    let price_row = row![
        text(format_price(currency, plant.price)).size(16),
        horizontal_space(),
        button(text("Add to Cart"))
            .style(button::success)
            .on_press(Message::AddToCart(plant.cart_item())),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            thumbnail(thumbnails, &plant.image_url, CARD_IMAGE_HEIGHT),
            name,
            text(plant.display_description()).size(14),
            muted_text(plant.display_category()),
            price_row,
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fixed(CARD_WIDTH))
    .style(container::rounded_box)
    .into()
}

/// Plant grid, rebuilt from the current list on every frame
pub fn plant_grid<'a>(
    catalog: &'a Catalog,
    thumbnails: &'a ThumbnailCache,
    currency: &str,
) -> Element<'a, Message> {
    match catalog.grid() {
        GridView::Blank => muted_text(""),
        GridView::Loading => muted_text("Loading trees…"),
        GridView::Failed(message) => error_text(message),
        GridView::Empty => container(text(NO_PLANTS_MESSAGE)).padding(18).into(),
        GridView::Cards(plants) => {
            let cards = plants
                .iter()
                .map(|plant| plant_card(plant, thumbnails, currency))
                .collect();

            Wrap::with_elements(cards)
                .spacing(16.0)
                .line_spacing(16.0)
                .into()
        }
    }
}
