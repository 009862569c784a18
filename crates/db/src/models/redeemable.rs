//! Redeemable catalog model.

use hackdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `redeemables` table.
///
/// `quantity` is the baseline stock count; the effective available balance
/// is `quantity + sum(transaction deltas)` and is computed by the ledger.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Redeemable {
    pub id: DbId,
    pub competition_code: String,
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new redeemable.
#[derive(Debug, Deserialize)]
pub struct CreateRedeemable {
    pub competition_code: String,
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
}

/// DTO for patching a redeemable. The identity pair is immutable, so only
/// quantity and description are patchable.
#[derive(Debug, Deserialize)]
pub struct UpdateRedeemable {
    pub quantity: Option<i32>,
    pub description: Option<String>,
}
