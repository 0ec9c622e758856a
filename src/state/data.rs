//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the API layer and the UI layer. Everything here except the cart
//! is a snapshot of the last fetch and is replaced in full.

use std::fmt;

/// Opaque catalog identifier
///
/// The API sends ids as strings or numbers; both are kept in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A category button in the category bar
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Missing ids are still selectable, but load the same list as "All"
    pub id: Option<ItemId>,
    pub display_name: String,
}

/// A plant card in the catalog grid
#[derive(Debug, Clone, PartialEq)]
pub struct PlantSummary {
    pub id: Option<ItemId>,
    pub name: String,
    /// Empty when the API gave no image (a placeholder is drawn instead)
    pub image_url: String,
    /// Already truncated for card display
    pub short_description: String,
    pub price: f64,
    pub category: String,
}

/// Card text when a plant has no description
pub const NO_DESCRIPTION: &str = "No description available";
/// Card badge when a plant has no category
pub const DEFAULT_CATEGORY_BADGE: &str = "Tree";

impl PlantSummary {
    pub fn display_description(&self) -> &str {
        if self.short_description.is_empty() {
            NO_DESCRIPTION
        } else {
            &self.short_description
        }
    }

    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            DEFAULT_CATEGORY_BADGE
        } else {
            &self.category
        }
    }

    /// Snapshot of the fields shown on the card, for the cart
    pub fn cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Expanded plant record shown in the detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct PlantDetail {
    pub id: Option<ItemId>,
    pub name: String,
    pub image_url: String,
    /// Untruncated
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl PlantDetail {
    pub fn cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// What an "Add to Cart" action hands to the cart store
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: Option<ItemId>,
    pub name: String,
    pub price: f64,
}

/// Format a price for display, e.g. `৳300`
pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{}{}", symbol, price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_drops_trailing_zero_fraction() {
        assert_eq!(format_price("৳", 300.0), "৳300");
        assert_eq!(format_price("৳", 12.5), "৳12.5");
    }

    #[test]
    fn test_card_snapshot_keeps_shown_price() {
        let plant = PlantSummary {
            id: Some(ItemId::new("p1")),
            name: "Mango".to_string(),
            image_url: String::new(),
            short_description: String::new(),
            price: 300.0,
            category: "Fruit Tree".to_string(),
        };

        let item = plant.cart_item();
        assert_eq!(item.id, Some(ItemId::new("p1")));
        assert_eq!(item.name, "Mango");
        assert_eq!(item.price, 300.0);
    }

    #[test]
    fn test_card_text_fallbacks() {
        let mut plant = PlantSummary {
            id: None,
            name: "Neem".to_string(),
            image_url: String::new(),
            short_description: String::new(),
            price: 500.0,
            category: String::new(),
        };
        assert_eq!(plant.display_description(), "No description available");
        assert_eq!(plant.display_category(), "Tree");

        plant.short_description = "Hardy shade tree".to_string();
        plant.category = "Medicinal".to_string();
        assert_eq!(plant.display_description(), "Hardy shade tree");
        assert_eq!(plant.display_category(), "Medicinal");
    }
}
