//! User management endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{User, UserRole, UserUpdate};

/// Fetch the user table, optionally filtered by role
pub async fn list(client: &HttpClient, role: Option<UserRole>) -> ClientResult<Vec<User>> {
    let path = match role {
        Some(role) => {
            // UserRole serializes as a kebab-case string
            let value = serde_json::to_value(role).map_err(crate::ClientError::Serialization)?;
            format!(
                "users/user-detail-table?role={}",
                value.as_str().unwrap_or_default()
            )
        }
        None => "users/user-detail-table".to_string(),
    };
    client.get(&path).await
}

/// Update a user (name, role, verification flag)
pub async fn update(client: &HttpClient, payload: &UserUpdate) -> ClientResult<User> {
    client.put("users/update-user", payload).await
}
