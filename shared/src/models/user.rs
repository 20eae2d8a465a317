//! User Model

use serde::{Deserialize, Serialize};

/// Role drives route-level authorization only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Admin,
    Manager,
    OrderManager,
    KitchenManager,
    #[default]
    Customer,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_verified: bool,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: String,
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub is_verified: Option<bool>,
}
