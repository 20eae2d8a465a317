//! Cart aggregator
//!
//! Accumulates menu items and combo meals for an in-progress order.
//! Adding the same item with the same modifier set merges into one line;
//! dropping a line's quantity to zero removes the line entirely, so a
//! zero-quantity line never exists.

use super::StateError;
use shared::models::{ComboMeal, MenuItem, Modifier, OrderItem, OrderItemKind};
use shared::money;
use uuid::Uuid;

/// One entry in the in-progress order
#[derive(Debug, Clone)]
pub struct CartLine {
    pub line_id: Uuid,
    pub item_id: String,
    pub name: String,
    pub kind: OrderItemKind,
    /// Base price for menu items; the precomputed discounted price for combos
    base_price: f64,
    /// Selected modifiers, resolved at add time (always empty for combos)
    modifiers: Vec<Modifier>,
    pub quantity: i32,
    pub instructions: Option<String>,
}

impl CartLine {
    /// Resolved unit price: base price plus the selected modifier prices
    pub fn unit_price(&self) -> f64 {
        money::unit_price(self.base_price, self.modifiers.iter().map(|m| m.price))
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> f64 {
        money::line_total(self.unit_price(), self.quantity)
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Sorted modifier ids, used as the merge key
    fn modifier_key(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.modifiers.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

/// In-memory cart for the order being built
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu item, merging with an existing line when the item id and
    /// modifier set match
    ///
    /// Modifier ids that do not exist on the item are dropped during
    /// resolution. Returns the id of the affected line.
    pub fn add(
        &mut self,
        item: &MenuItem,
        quantity: i32,
        modifier_ids: &[&str],
    ) -> Result<Uuid, StateError> {
        if !item.is_available {
            return Err(StateError::Unavailable {
                name: item.name.clone(),
            });
        }
        if quantity < 1 {
            return Err(StateError::InvalidQuantity(quantity));
        }

        let modifiers: Vec<Modifier> = modifier_ids
            .iter()
            .filter_map(|id| item.modifier(id).cloned())
            .collect();

        let line = CartLine {
            line_id: Uuid::new_v4(),
            item_id: item.id.clone(),
            name: item.name.clone(),
            kind: OrderItemKind::MenuItem,
            base_price: item.price,
            modifiers,
            quantity,
            instructions: None,
        };
        Ok(self.add_or_merge(line))
    }

    /// Add a combo meal (modifiers never apply to combos)
    pub fn add_combo(&mut self, combo: &ComboMeal, quantity: i32) -> Result<Uuid, StateError> {
        if !combo.is_available {
            return Err(StateError::Unavailable {
                name: combo.name.clone(),
            });
        }
        if quantity < 1 {
            return Err(StateError::InvalidQuantity(quantity));
        }

        let line = CartLine {
            line_id: Uuid::new_v4(),
            item_id: combo.id.clone(),
            name: combo.name.clone(),
            kind: OrderItemKind::ComboMeal,
            base_price: combo.price,
            modifiers: Vec::new(),
            quantity,
            instructions: None,
        };
        Ok(self.add_or_merge(line))
    }

    fn add_or_merge(&mut self, line: CartLine) -> Uuid {
        if let Some(existing) = self.lines.iter_mut().find(|l| {
            l.kind == line.kind && l.item_id == line.item_id && l.modifier_key() == line.modifier_key()
        }) {
            existing.quantity += line.quantity;
            existing.line_id
        } else {
            let id = line.line_id;
            self.lines.push(line);
            id
        }
    }

    /// Set a line's quantity; zero or below deletes the line
    ///
    /// Unknown line ids are ignored: cart operations are total functions
    /// over the in-memory cart.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: i32) {
        if quantity <= 0 {
            self.remove(line_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.quantity = quantity;
        }
    }

    /// Delete a line unconditionally
    pub fn remove(&mut self, line_id: Uuid) {
        self.lines.retain(|l| l.line_id != line_id);
    }

    /// Attach free-text instructions to a line
    pub fn set_instructions(&mut self, line_id: Uuid, text: impl Into<String>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.instructions = Some(text.into());
        }
    }

    /// Sum of unit_price x quantity over all lines
    pub fn total(&self) -> f64 {
        money::cart_total(self.lines.iter().map(|l| (l.unit_price(), l.quantity)))
    }

    /// Build the order item tuples for submission
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem {
                item_id: l.item_id.clone(),
                kind: l.kind,
                quantity: l.quantity,
                unit_price: l.unit_price(),
            })
            .collect()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
