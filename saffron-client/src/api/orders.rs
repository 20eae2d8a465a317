//! Order endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{Order, OrderCreate};
use tracing::info;

/// Submit an order
///
/// One network call per submission; there is no idempotency key, so the
/// caller must not retry automatically (a retried submission after a
/// transient failure can duplicate the order).
pub async fn create(client: &HttpClient, payload: &OrderCreate) -> ClientResult<Order> {
    let order: Order = client.post("orders", payload).await?;
    info!(order_id = %order.id, table_id = %order.table_id, total = order.total, "order submitted");
    Ok(order)
}
