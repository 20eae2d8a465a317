//! Table endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{Table, TableCreate, TableUpdate};

/// Fetch the full table list
pub async fn list(client: &HttpClient) -> ClientResult<Vec<Table>> {
    client.get("tables").await
}

/// Create a table
pub async fn create(client: &HttpClient, payload: &TableCreate) -> ClientResult<Table> {
    client.post("tables", payload).await
}

/// Update a table (full-record update keyed by `payload.id`)
pub async fn update(client: &HttpClient, payload: &TableUpdate) -> ClientResult<Table> {
    client.put("tables", payload).await
}

/// Delete a table
pub async fn remove(client: &HttpClient, id: &str) -> ClientResult<()> {
    client.delete(&format!("tables/{id}")).await
}
