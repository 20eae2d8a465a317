//! Combo Meal Model

use crate::{ModelError, money};
use serde::{Deserialize, Serialize};

use super::MenuItem;

/// Combo meal entity: a bundle of >= 2 menu items at a fixed discount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboMeal {
    pub id: String,
    pub name: String,
    /// Constituent menu item references
    pub item_ids: Vec<String>,
    /// 85% of the summed constituent prices, computed at creation
    pub price: f64,
    pub is_available: bool,
}

/// Create combo payload
///
/// Built through [`ComboCreate::from_items`] so the >= 2 item precondition
/// and the discounted price are established before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboCreate {
    pub name: String,
    pub item_ids: Vec<String>,
    pub price: f64,
}

impl ComboCreate {
    /// Build a combo from the selected menu items
    pub fn from_items(name: impl Into<String>, items: &[&MenuItem]) -> Result<Self, ModelError> {
        let prices: Vec<f64> = items.iter().map(|i| i.price).collect();
        let price = money::combo_price(&prices)?;
        Ok(Self {
            name: name.into(),
            item_ids: items.iter().map(|i| i.id.clone()).collect(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price,
            is_available: true,
            category: "cat-1".to_string(),
            modifiers: Vec::new(),
        }
    }

    #[test]
    fn test_combo_create_applies_discount() {
        let a = item("item-a", 12.0);
        let b = item("item-b", 10.0);
        let combo = ComboCreate::from_items("Lunch Duo", &[&a, &b]).unwrap();
        assert_eq!(combo.price, 18.70);
        assert_eq!(combo.item_ids, vec!["item-a", "item-b"]);
    }

    #[test]
    fn test_combo_create_rejects_single_item() {
        let a = item("item-a", 12.0);
        assert!(matches!(
            ComboCreate::from_items("Solo", &[&a]),
            Err(ModelError::ComboTooSmall(1))
        ));
    }
}
