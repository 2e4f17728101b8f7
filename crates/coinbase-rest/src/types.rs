//! Types for Coinbase REST API responses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard Coinbase v2 response wrapper
///
/// Only successful responses are decoded with this type; the `errors`
/// envelope of a failed response has its own reader.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload (present if successful)
    pub data: Option<T>,
    /// Pagination cursor for list endpoints
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// Deprecation and similar notices
    #[serde(default)]
    pub warnings: Option<Vec<ApiWarning>>,
}

/// Error entry in a failed response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    /// Machine readable id (e.g. `not_found`, `authentication_error`)
    pub id: String,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// Warning entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiWarning {
    /// Warning id
    pub id: String,
    /// Message
    #[serde(default)]
    pub message: Option<String>,
}

/// Pagination cursor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Pagination {
    /// Ending cursor
    pub ending_before: Option<String>,
    /// Starting cursor
    pub starting_after: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Sort order
    pub order: Option<String>,
    /// Relative URI of the previous page
    pub previous_uri: Option<String>,
    /// Relative URI of the next page
    pub next_uri: Option<String>,
}

/// Error envelope of a failed response (`{"errors": [...]}`)
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
}

impl ErrorBody {
    /// Join the error messages, falling back to ids
    pub fn message(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| e.message.clone().unwrap_or_else(|| e.id.clone()))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Check whether any entry carries the given id
    pub fn has_id(&self, id: &str) -> bool {
        self.errors
            .as_ref()
            .map(|errors| errors.iter().any(|e| e.id == id))
            .unwrap_or(false)
    }
}

// ============================================================================
// Time
// ============================================================================

/// Exchange clock
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerTime {
    /// ISO-8601 time
    #[serde(default)]
    pub iso: Option<String>,
    /// Unix epoch seconds
    #[serde(default)]
    pub epoch: Option<u64>,
}

// ============================================================================
// Accounts
// ============================================================================

/// Amount in a given currency
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Money {
    /// Amount (decimal string on the wire)
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Currency code
    pub currency: String,
}

/// Wallet account
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    /// Account id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Primary flag
    #[serde(default)]
    pub primary: bool,
    /// Account type (e.g. `wallet`, `vault`)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Currency (a code or a currency object depending on API version)
    #[serde(default)]
    pub currency: Option<serde_json::Value>,
    /// Balance
    #[serde(default)]
    pub balance: Option<Money>,
    /// Any other exchange-supplied fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

// ============================================================================
// Addresses
// ============================================================================

/// Deposit address
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Address {
    /// Address id
    pub id: String,
    /// On-chain address
    #[serde(default)]
    pub address: Option<String>,
    /// Name given at creation
    #[serde(default)]
    pub name: Option<String>,
    /// Network (e.g. `bitcoin`)
    #[serde(default)]
    pub network: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// API resource path
    #[serde(default)]
    pub resource_path: Option<String>,
    /// Any other exchange-supplied fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Transaction received on an address
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    /// Transaction id
    pub id: String,
    /// Transaction type (e.g. `send`)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Status (e.g. `completed`, `pending`)
    #[serde(default)]
    pub status: Option<String>,
    /// Amount in the account currency
    #[serde(default)]
    pub amount: Option<Money>,
    /// Amount in the user's native currency
    #[serde(default)]
    pub native_amount: Option<Money>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Any other exchange-supplied fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Transaction {
    /// Check if the transaction has completed
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed")
    }
}
