//! Menu Item Model

use crate::{ModelError, money};
use serde::{Deserialize, Serialize};

/// Named optional add-on with its own incremental price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub is_available: bool,
    /// Category reference
    pub category: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl MenuItem {
    /// Check price invariants (base price and every modifier price)
    pub fn validate(&self) -> Result<(), ModelError> {
        money::validate_price(self.price)?;
        for modifier in &self.modifiers {
            money::validate_price(modifier.price)?;
        }
        Ok(())
    }

    /// Look up a modifier by id
    pub fn modifier(&self, id: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> MenuItem {
        MenuItem {
            id: "item-1".to_string(),
            name: "Margherita".to_string(),
            description: String::new(),
            price: 10.0,
            is_available: true,
            category: "cat-pizza".to_string(),
            modifiers: vec![Modifier {
                id: "mod-1".to_string(),
                name: "Extra cheese".to_string(),
                price: 2.5,
            }],
        }
    }

    #[test]
    fn test_validate_accepts_non_negative_prices() {
        assert!(item().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_modifier_price() {
        let mut bad = item();
        bad.modifiers[0].price = -1.0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_modifier_lookup() {
        let item = item();
        assert_eq!(item.modifier("mod-1").map(|m| m.price), Some(2.5));
        assert!(item.modifier("mod-404").is_none());
    }
}
