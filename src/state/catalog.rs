use super::data::{Category, PlantSummary};
use crate::api::client::PlantFilter;

/// Lifecycle of one independently loaded section of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// Nothing requested yet
    Idle,
    Loading,
    Loaded(T),
    /// Inline message shown in place of the section
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Which category button is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The synthetic "All Trees" button
    All,
    /// Index into the fetched category list
    Category(usize),
}

/// Label of the synthetic first button in the category bar
pub const ALL_LABEL: &str = "All Trees";

/// Shown instead of the grid when a category has no plants
pub const NO_PLANTS_MESSAGE: &str = "No trees found for this category.";

/// One button of the category bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry<'a> {
    pub label: &'a str,
    pub selection: Selection,
    pub active: bool,
}

/// What the plant area should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridView<'a> {
    Blank,
    Loading,
    Failed(&'a str),
    /// Loaded, but nothing to show
    Empty,
    Cards(&'a [PlantSummary]),
}

/// Category bar and plant grid state
///
/// Plant reloads are numbered; only the response to the most recent
/// request is applied to the grid.
#[derive(Debug)]
pub struct Catalog {
    pub categories: Loadable<Vec<Category>>,
    pub plants: Loadable<Vec<PlantSummary>>,
    active: Option<Selection>,
    generation: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: Loadable::Idle,
            plants: Loadable::Idle,
            active: None,
            generation: 0,
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Selection> {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a category fetch
    pub fn begin_categories(&mut self) {
        self.categories = Loadable::Loading;
    }

    /// Store fetched categories; the bar always starts with "All" selected
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = Loadable::Loaded(categories);
        self.active = None;
    }

    pub fn fail_categories(&mut self, message: impl Into<String>) {
        self.categories = Loadable::Failed(message.into());
        self.active = None;
    }

    /// Make `selection` the single active button and start a grid reload
    ///
    /// Returns the request generation and what to fetch, or `None` if the
    /// selection does not exist (categories not loaded, stale index).
    pub fn select(&mut self, selection: Selection) -> Option<(u64, PlantFilter)> {
        let filter = match (selection, &self.categories) {
            (Selection::All, Loadable::Loaded(_)) => PlantFilter::All,
            (Selection::Category(index), Loadable::Loaded(categories)) => {
                match categories.get(index)?.id.clone() {
                    Some(id) => PlantFilter::Category(id),
                    None => PlantFilter::All,
                }
            }
            _ => return None,
        };

        self.active = Some(selection);
        self.generation += 1;
        self.plants = Loadable::Loading;
        Some((self.generation, filter))
    }

    /// Apply a plant response if it belongs to the latest request
    ///
    /// Returns false when the response was stale and dropped.
    pub fn finish_plants(
        &mut self,
        generation: u64,
        result: Result<Vec<PlantSummary>, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.plants = match result {
            Ok(plants) => Loadable::Loaded(plants),
            Err(message) => Loadable::Failed(message),
        };
        true
    }

    /// Category buttons in display order, "All Trees" first
    ///
    /// Empty until the category list has loaded.
    pub fn category_entries(&self) -> Vec<CategoryEntry<'_>> {
        let Loadable::Loaded(categories) = &self.categories else {
            return Vec::new();
        };

        let all = CategoryEntry {
            label: ALL_LABEL,
            selection: Selection::All,
            active: self.active == Some(Selection::All),
        };
        let fetched = categories.iter().enumerate().map(|(index, category)| {
            let selection = Selection::Category(index);
            CategoryEntry {
                label: category.display_name.as_str(),
                selection,
                active: self.active == Some(selection),
            }
        });

        std::iter::once(all).chain(fetched).collect()
    }

    pub fn grid(&self) -> GridView<'_> {
        match &self.plants {
            Loadable::Idle => GridView::Blank,
            Loadable::Loading => GridView::Loading,
            Loadable::Failed(message) => GridView::Failed(message),
            Loadable::Loaded(plants) if plants.is_empty() => GridView::Empty,
            Loadable::Loaded(plants) => GridView::Cards(plants),
        }
    }

    /// Global spinner visibility
    pub fn is_busy(&self) -> bool {
        self.categories.is_loading() || self.plants.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ItemId;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: Some(ItemId::new("1")),
                display_name: "Fruit Tree".to_string(),
            },
            Category {
                id: None,
                display_name: "Mystery".to_string(),
            },
        ]
    }

    fn plant(name: &str) -> PlantSummary {
        PlantSummary {
            id: Some(ItemId::new(name)),
            name: name.to_string(),
            image_url: String::new(),
            short_description: String::new(),
            price: 100.0,
            category: String::new(),
        }
    }

    #[test]
    fn test_no_selection_before_categories_load() {
        let mut catalog = Catalog::new();
        assert!(catalog.select(Selection::All).is_none());

        catalog.begin_categories();
        assert!(catalog.select(Selection::All).is_none());
        assert!(catalog.is_busy());
    }

    #[test]
    fn test_select_maps_to_filters() {
        let mut catalog = Catalog::new();
        catalog.set_categories(categories());

        assert_eq!(catalog.select(Selection::All), Some((1, PlantFilter::All)));
        assert_eq!(
            catalog.select(Selection::Category(0)),
            Some((2, PlantFilter::Category(ItemId::new("1"))))
        );
        assert_eq!(catalog.active(), Some(Selection::Category(0)));

        // A category without an id loads everything but stays highlighted itself
        assert_eq!(catalog.select(Selection::Category(1)), Some((3, PlantFilter::All)));
        assert_eq!(catalog.active(), Some(Selection::Category(1)));

        assert!(catalog.select(Selection::Category(9)).is_none());
        assert_eq!(catalog.active(), Some(Selection::Category(1)));
    }

    #[test]
    fn test_stale_plant_response_is_dropped() {
        let mut catalog = Catalog::new();
        catalog.set_categories(categories());

        let (first, _) = catalog.select(Selection::All).unwrap();
        let (second, _) = catalog.select(Selection::Category(0)).unwrap();

        assert!(catalog.finish_plants(second, Ok(vec![plant("mango")])));
        assert!(!catalog.finish_plants(first, Ok(vec![plant("a"), plant("b")])));

        assert_eq!(catalog.plants, Loadable::Loaded(vec![plant("mango")]));
        assert!(!catalog.is_busy());
    }

    #[test]
    fn test_plant_failure_is_inline() {
        let mut catalog = Catalog::new();
        catalog.set_categories(Vec::new());
        let (generation, _) = catalog.select(Selection::All).unwrap();

        catalog.finish_plants(generation, Err("Failed to load trees.".to_string()));
        assert_eq!(catalog.plants, Loadable::Failed("Failed to load trees.".to_string()));
    }

    #[test]
    fn test_category_entries_start_with_all() {
        let mut catalog = Catalog::new();
        assert!(catalog.category_entries().is_empty());

        catalog.set_categories(categories());
        catalog.select(Selection::All);

        let entries = catalog.category_entries();
        let labels: Vec<&str> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["All Trees", "Fruit Tree", "Mystery"]);
        assert_eq!(entries[1].selection, Selection::Category(0));

        let active: Vec<bool> = entries.iter().map(|e| e.active).collect();
        assert_eq!(active, vec![true, false, false]);

        catalog.select(Selection::Category(1));
        let active: Vec<bool> = catalog.category_entries().iter().map(|e| e.active).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn test_empty_category_list_still_offers_all() {
        let mut catalog = Catalog::new();
        catalog.set_categories(Vec::new());

        let entries = catalog.category_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, ALL_LABEL);
    }

    #[test]
    fn test_grid_view_follows_plant_state() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.grid(), GridView::Blank);

        catalog.set_categories(categories());
        let (generation, _) = catalog.select(Selection::Category(0)).unwrap();
        assert_eq!(catalog.grid(), GridView::Loading);

        catalog.finish_plants(generation, Ok(Vec::new()));
        assert_eq!(catalog.grid(), GridView::Empty);

        let (generation, _) = catalog.select(Selection::All).unwrap();
        catalog.finish_plants(generation, Ok(vec![plant("mango")]));
        match catalog.grid() {
            GridView::Cards(plants) => assert_eq!(plants[0].name, "mango"),
            other => panic!("unexpected grid view: {:?}", other),
        }

        let (generation, _) = catalog.select(Selection::All).unwrap();
        catalog.finish_plants(generation, Err("Failed to load trees.".to_string()));
        assert_eq!(catalog.grid(), GridView::Failed("Failed to load trees."));
    }
}
