//! Data models
//!
//! Shared between the backend API and the client (via JSON).
//! All IDs are `String` (backend-assigned document IDs).

pub mod category;
pub mod combo;
pub mod menu_item;
pub mod order;
pub mod table;
pub mod user;

// Re-exports
pub use category::*;
pub use combo::*;
pub use menu_item::*;
pub use order::*;
pub use table::*;
pub use user::*;
