//! Transaction ledger model.

use hackdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `transactions` table: one signed quantity delta against a
/// redeemable for one attendee. Negative = redemption, positive = grant.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Transaction {
    pub id: DbId,
    pub competition_code: String,
    pub redeemable_name: String,
    pub user_id: String,
    pub quantity: i32,
    pub transacted_at: Timestamp,
}

/// DTO for appending a transaction to the ledger.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub competition_code: String,
    pub user_id: String,
    pub redeemable_name: String,
    pub quantity: i32,
}

/// A transaction row enriched with display fields from its attendee and
/// redeemable. Read-only; used by the listing endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionWithDetails {
    pub id: DbId,
    pub competition_code: String,
    pub redeemable_name: String,
    pub user_id: String,
    pub quantity: i32,
    pub transacted_at: Timestamp,
    pub attendee_name: String,
    pub redeemable_description: Option<String>,
}

/// Optional filters for the transaction listing.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilter {
    pub competition_code: Option<String>,
    pub user_id: Option<String>,
    pub redeemable_name: Option<String>,
}
