//! Order Model

use crate::{ModelError, money};
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Started,
    InProgress,
    Completed,
    Cancelled,
}

/// Payment method chosen at submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Mobile,
}

/// Whether an order line references a menu item or a combo meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderItemKind {
    MenuItem,
    ComboMeal,
}

/// One line of a submitted order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_id: String,
    pub kind: OrderItemKind,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Order entity (server-assigned id; never mutated client-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItem>,
}

/// Create order payload, built once at submission time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItem>,
}

impl OrderCreate {
    /// Check that the declared total equals the sum of line totals
    pub fn validate(&self) -> Result<(), ModelError> {
        let line_sum = money::cart_total(self.items.iter().map(|i| (i.unit_price, i.quantity)));
        if line_sum != self.total {
            return Err(ModelError::TotalMismatch {
                total: self.total,
                line_sum,
            });
        }
        Ok(())
    }
}
