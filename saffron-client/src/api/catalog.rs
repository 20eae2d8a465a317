//! Menu catalog endpoints: items, categories, combo meals

use crate::{ClientResult, HttpClient};
use shared::models::{Category, CategoryCreate, ComboCreate, ComboMeal, MenuItem};

/// Fetch all menu items
pub async fn list_menu_items(client: &HttpClient) -> ClientResult<Vec<MenuItem>> {
    client.get("menu-items").await
}

/// Fetch all categories
pub async fn list_categories(client: &HttpClient) -> ClientResult<Vec<Category>> {
    client.get("categories").await
}

/// Create a category
pub async fn create_category(
    client: &HttpClient,
    payload: &CategoryCreate,
) -> ClientResult<Category> {
    client.post("categories", payload).await
}

/// Delete a category
pub async fn delete_category(client: &HttpClient, id: &str) -> ClientResult<()> {
    client.delete(&format!("categories/{id}")).await
}

/// Fetch all combo meals
pub async fn list_combos(client: &HttpClient) -> ClientResult<Vec<ComboMeal>> {
    client.get("combo-meals").await
}

/// Create a combo meal (payload already carries the discounted price)
pub async fn create_combo(client: &HttpClient, payload: &ComboCreate) -> ClientResult<ComboMeal> {
    client.post("combo-meals", payload).await
}
