//! Attendee model.
//!
//! Attendee ids are external badge/user identifiers, not database serials:
//! the check-in scanner and the ledger both address attendees by the id
//! printed on the badge.

use hackdesk_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `attendees` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Attendee {
    pub id: String,
    pub competition_code: String,
    pub display_name: String,
    pub email: Option<String>,
    pub checked_in: bool,
    pub created_at: Timestamp,
}

/// DTO for registering a new attendee.
#[derive(Debug, Deserialize)]
pub struct CreateAttendee {
    pub id: String,
    pub competition_code: String,
    pub display_name: String,
    pub email: Option<String>,
}
