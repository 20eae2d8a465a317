//! Catalog stores: menu items, categories, combo meals
//!
//! Read-mostly caches of the fetched catalog. Local edits round-trip
//! through the API and land here via the next `replace_*` call.

use shared::models::{Category, ComboMeal, MenuItem};

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    menu_items: Vec<MenuItem>,
    categories: Vec<Category>,
    combos: Vec<ComboMeal>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_menu_items(&mut self, items: Vec<MenuItem>) {
        self.menu_items = items;
    }

    /// Replace categories, kept sorted by sort order for display
    pub fn replace_categories(&mut self, mut categories: Vec<Category>) {
        categories.sort_by_key(|c| c.sort_order);
        self.categories = categories;
    }

    pub fn replace_combos(&mut self, combos: Vec<ComboMeal>) {
        self.combos = combos;
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn combos(&self) -> &[ComboMeal] {
        &self.combos
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|i| i.id == id)
    }

    pub fn combo(&self, id: &str) -> Option<&ComboMeal> {
        self.combos.iter().find(|c| c.id == id)
    }

    /// Items offered for ordering (unavailable ones stay visible in
    /// management screens but never reach a cart)
    pub fn available_menu_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu_items.iter().filter(|i| i.is_available)
    }

    /// Items belonging to one category
    pub fn items_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.menu_items.iter().filter(move |i| i.category == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: 9.0,
            is_available: available,
            category: category.to_string(),
            modifiers: Vec::new(),
        }
    }

    #[test]
    fn test_categories_sorted_by_sort_order() {
        let mut store = CatalogStore::new();
        store.replace_categories(vec![
            Category {
                id: "c2".to_string(),
                name: "Mains".to_string(),
                sort_order: 2,
                is_active: true,
            },
            Category {
                id: "c1".to_string(),
                name: "Starters".to_string(),
                sort_order: 1,
                is_active: true,
            },
        ]);
        let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Starters", "Mains"]);
    }

    #[test]
    fn test_available_filter_and_lookups() {
        let mut store = CatalogStore::new();
        store.replace_menu_items(vec![
            item("i1", "c1", true),
            item("i2", "c1", false),
            item("i3", "c2", true),
        ]);
        assert_eq!(store.available_menu_items().count(), 2);
        assert_eq!(store.items_in_category("c1").count(), 2);
        assert!(store.menu_item("i2").is_some());
        assert!(store.menu_item("i9").is_none());
    }
}
