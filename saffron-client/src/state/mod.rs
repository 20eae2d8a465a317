//! Application state layer
//!
//! Explicit state objects a UI drives by reference; all mutation goes
//! through methods here, never through shared globals. Stores hold the last
//! fetched server data and are replaced wholesale after each re-fetch (the
//! backend stays authoritative).

pub mod cart;
pub mod catalog;
pub mod order_draft;
pub mod session;
pub mod tables;

pub use cart::{Cart, CartLine};
pub use catalog::CatalogStore;
pub use order_draft::{OrderDraft, SubmitOutcome};
pub use session::{Access, Route, Session};
pub use tables::TableStore;

use thiserror::Error;

/// Client-side precondition violations
///
/// These are the failures a screen prevents by disabling controls; they
/// never reach the network.
#[derive(Debug, Error)]
pub enum StateError {
    /// Unavailable items cannot be added to a cart
    #[error("\"{name}\" is currently unavailable")]
    Unavailable { name: String },

    /// Cart lines always carry at least one unit
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),
}

/// Top-level application state for one screen session
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Session,
    pub tables: TableStore,
    pub catalog: CatalogStore,
    pub draft: OrderDraft,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
