//! Dining Table Model

use crate::ModelError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Table occupancy status
///
/// Drives which staff actions are offered for the table. Display rule only:
/// the backend stays authoritative and the client re-fetches after each
/// action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Ordering,
    NeedsCleaning,
}

/// Staff action offered for a table in a given status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableAction {
    StartOrder,
    ContinueOrder,
    CancelOrder,
    ViewOrder,
    ProcessPayment,
    MarkForCleaning,
    MarkAvailable,
    SeatCustomers,
    CancelReservation,
}

impl TableStatus {
    /// Permitted actions for this status
    ///
    /// Exhaustive match so a new status is a compile-time-checked change.
    pub fn actions(&self) -> &'static [TableAction] {
        match self {
            Self::Available => &[TableAction::StartOrder],
            Self::Ordering => &[TableAction::ContinueOrder, TableAction::CancelOrder],
            Self::Occupied => &[
                TableAction::ViewOrder,
                TableAction::ProcessPayment,
                TableAction::MarkForCleaning,
            ],
            Self::NeedsCleaning => &[TableAction::MarkAvailable],
            Self::Reserved => &[TableAction::SeatCustomers, TableAction::CancelReservation],
        }
    }

    /// Whether tables in this status may carry active-order metadata
    pub fn carries_order(&self) -> bool {
        matches!(self, Self::Occupied | Self::Ordering)
    }
}

/// Table size class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Metadata of the order currently running on a table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOrderInfo {
    pub order_id: String,
    pub guest_count: i32,
    pub started_at: DateTime<Utc>,
    pub running_total: f64,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    /// Display number shown on the floor board
    pub number: i32,
    pub status: TableStatus,
    pub size: TableSize,
    pub floor: i32,
    /// Present only while the table is occupied/ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_order: Option<ActiveOrderInfo>,
}

impl Table {
    /// Check status/active-order joint consistency
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.active_order.is_some() && !self.status.carries_order() {
            return Err(ModelError::OrphanOrderMetadata {
                table_id: self.id.clone(),
                status: format!("{:?}", self.status),
            });
        }
        Ok(())
    }
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub number: i32,
    pub size: TableSize,
    pub floor: i32,
}

/// Update table payload (full-record update; the server stays authoritative)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    pub id: String,
    pub number: Option<i32>,
    pub status: Option<TableStatus>,
    pub size: Option<TableSize>,
    pub floor: Option<i32>,
}
