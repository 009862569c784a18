//! Competition model.

use hackdesk_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `competitions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Competition {
    pub code: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new competition.
#[derive(Debug, Deserialize)]
pub struct CreateCompetition {
    pub code: String,
    pub name: String,
}
