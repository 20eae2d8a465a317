//! Order submission
//!
//! Combines the cart with the selected table and customer metadata into a
//! single `POST /orders`. Preconditions (non-empty cart, selected table)
//! short-circuit before any network call; failures leave the draft intact
//! so the operator can retry manually.

use super::cart::Cart;
use crate::{ClientResult, HttpClient, api};
use shared::models::{Order, OrderCreate, OrderStatus, PaymentMethod};
use tracing::debug;

/// Result of a submission attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Order accepted by the backend; cart and customer fields were reset
    Submitted(Order),
    /// Preconditions not met; nothing was sent
    Skipped,
}

/// The order being assembled on the quick-order screen
#[derive(Debug, Default)]
pub struct OrderDraft {
    pub cart: Cart,
    pub table_id: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_method: PaymentMethod,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.cart.is_empty() && self.table_id.is_some()
    }

    /// Build the request payload, or None when preconditions fail
    fn build_request(&self) -> Option<OrderCreate> {
        let table_id = self.table_id.clone()?;
        if self.cart.is_empty() {
            return None;
        }
        Some(OrderCreate {
            table_id,
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            total: self.cart.total(),
            status: OrderStatus::Started,
            payment_method: self.payment_method,
            items: self.cart.order_items(),
        })
    }

    /// Submit the draft
    ///
    /// No automatic retry and no idempotency key: retrying after a
    /// transient failure is the operator's call and can duplicate the
    /// order on the backend.
    pub async fn submit(&mut self, client: &HttpClient) -> ClientResult<SubmitOutcome> {
        let Some(payload) = self.build_request() else {
            debug!("submit skipped: empty cart or no table selected");
            return Ok(SubmitOutcome::Skipped);
        };

        // Any error propagates here with the draft untouched for retry.
        let order = api::orders::create(client, &payload).await?;

        self.reset();
        Ok(SubmitOutcome::Submitted(order))
    }

    /// Clear the cart and form fields after a successful submission
    fn reset(&mut self) {
        self.cart.clear();
        self.customer_name.clear();
        self.customer_phone.clear();
        self.payment_method = PaymentMethod::default();
        self.table_id = None;
    }
}
