//! Saffron Client - HTTP client and application state for the POS backend
//!
//! Provides typed REST calls to the backend API plus the in-memory state
//! layer a screen drives: table store, catalog caches, cart aggregator,
//! session gate, and order submission.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod state;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use state::{AppState, StateError};

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::models::{
    Category, ComboMeal, MenuItem, Order, OrderCreate, Table, TableAction, TableStatus, User,
    UserRole,
};
