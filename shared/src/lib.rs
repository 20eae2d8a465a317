//! Shared types for the Saffron POS client
//!
//! Domain models, the API response envelope, and money arithmetic used by
//! the client crate. Everything here mirrors what the backend serializes.

pub mod error;
pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ModelError;
pub use response::ApiResponse;
