//! Field extraction for loosely-typed catalog records
//!
//! The API is inconsistent about key names (`name` vs `plant_name` vs
//! `common_name`...). Every canonical field is described by a [`FieldSpec`]
//! listing the keys to try in order; one resolver serves all of them.

use serde_json::{Map, Value};

use super::normalize::extract_list;
use crate::state::data::{Category, ItemId, PlantDetail, PlantSummary};

/// Price used when a record carries none, or nothing parseable
pub const DEFAULT_PRICE: f64 = 500.0;

/// Card descriptions are cut to this many characters
pub const SHORT_DESCRIPTION_LEN: usize = 120;

/// Ordered candidate keys for one canonical field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub keys: &'static [&'static str],
}

pub const CATEGORY_ID: FieldSpec = FieldSpec {
    keys: &["id", "category_id", "_id", "idCategory"],
};
pub const CATEGORY_NAME: FieldSpec = FieldSpec {
    keys: &["name", "category_name", "category", "title"],
};

pub const PLANT_ID: FieldSpec = FieldSpec {
    keys: &["id", "_id", "plant_id", "plantId", "idPlant"],
};
pub const PLANT_NAME: FieldSpec = FieldSpec {
    keys: &["name", "plant_name", "common_name", "title"],
};
pub const PLANT_IMAGE: FieldSpec = FieldSpec {
    keys: &["image", "image_url", "thumbnail", "img"],
};
pub const PLANT_SHORT_DESCRIPTION: FieldSpec = FieldSpec {
    keys: &["short_description", "description", "details", "info"],
};
pub const PLANT_PRICE: FieldSpec = FieldSpec {
    keys: &["price", "cost"],
};
pub const PLANT_CATEGORY: FieldSpec = FieldSpec {
    keys: &["category", "category_name", "cat"],
};

pub const DETAIL_NAME: FieldSpec = FieldSpec {
    keys: &["name", "plant_name", "common_name"],
};
pub const DETAIL_IMAGE: FieldSpec = FieldSpec {
    keys: &["image", "image_url", "img"],
};
pub const DETAIL_DESCRIPTION: FieldSpec = FieldSpec {
    keys: &["description", "details", "info"],
};
pub const DETAIL_PRICE: FieldSpec = FieldSpec {
    keys: &["price", "cost"],
};
pub const DETAIL_CATEGORY: FieldSpec = FieldSpec {
    keys: &["category", "category_name"],
};

/// JavaScript-style truthiness: null, false, 0, NaN and "" are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Value of the first key in `keys` holding a truthy value, else `fallback`
pub fn pick(record: &Map<String, Value>, keys: &[&str], fallback: Value) -> Value {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_truthy(value))
        .cloned()
        .unwrap_or(fallback)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Resolve a text field; objects and arrays count as absent
pub fn text(record: &Map<String, Value>, field: FieldSpec, fallback: &str) -> String {
    scalar_text(&pick(record, field.keys, Value::Null)).unwrap_or_else(|| fallback.to_string())
}

/// Resolve an identifier, numbers are kept in textual form
pub fn id(record: &Map<String, Value>, field: FieldSpec) -> Option<ItemId> {
    scalar_text(&pick(record, field.keys, Value::Null)).map(ItemId::new)
}

/// Resolve a price from a number or numeric string
///
/// Non-positive or unparseable values fall back to [`DEFAULT_PRICE`].
pub fn price(record: &Map<String, Value>, field: FieldSpec) -> f64 {
    let parsed = match pick(record, field.keys, Value::Null) {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|p| p.is_finite() && *p > 0.0)
        .unwrap_or(DEFAULT_PRICE)
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

pub fn category_from(record: &Map<String, Value>) -> Category {
    Category {
        id: id(record, CATEGORY_ID),
        display_name: text(record, CATEGORY_NAME, "Category"),
    }
}

pub fn plant_summary_from(record: &Map<String, Value>) -> PlantSummary {
    let description = text(record, PLANT_SHORT_DESCRIPTION, "");
    PlantSummary {
        id: id(record, PLANT_ID),
        name: text(record, PLANT_NAME, "Unnamed"),
        image_url: text(record, PLANT_IMAGE, ""),
        short_description: truncate_chars(&description, SHORT_DESCRIPTION_LEN),
        price: price(record, PLANT_PRICE),
        category: text(record, PLANT_CATEGORY, ""),
    }
}

/// Build a detail view for the plant that was requested as `id`
pub fn plant_detail_from(id: ItemId, record: &Map<String, Value>) -> PlantDetail {
    PlantDetail {
        id: Some(id),
        name: text(record, DETAIL_NAME, "Tree"),
        image_url: text(record, DETAIL_IMAGE, ""),
        description: text(record, DETAIL_DESCRIPTION, "No details available"),
        price: price(record, DETAIL_PRICE),
        category: text(record, DETAIL_CATEGORY, ""),
    }
}

fn decode_list<T>(payload: &Value, decode: impl Fn(&Map<String, Value>) -> T) -> Vec<T> {
    let empty = Map::new();
    extract_list(payload)
        .iter()
        .map(|item| decode(item.as_object().unwrap_or(&empty)))
        .collect()
}

/// Categories carried by a category-list response
pub fn categories_from(payload: &Value) -> Vec<Category> {
    decode_list(payload, category_from)
}

/// Plants carried by a plant-list response
pub fn plants_from(payload: &Value) -> Vec<PlantSummary> {
    decode_list(payload, plant_summary_from)
}
