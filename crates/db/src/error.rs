//! Error type for the balance-guarded ledger path.
//!
//! Expected business outcomes (overdraw, missing entities, bad delta) are
//! explicit variants so callers match on them instead of catching thrown
//! exceptions; only genuinely unexpected storage failures travel through
//! the wrapped [`sqlx::Error`].

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The redemption would take the redeemable's balance below zero.
    /// The message names the condition, not the aggregate numbers.
    #[error("Insufficient funds: redeeming {requested} units would overdraw the available balance")]
    InsufficientFunds { requested: u32 },

    /// A referenced entity (competition, redeemable, or attendee) is missing.
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    /// The request shape is invalid (e.g. a zero delta).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unexpected storage failure; propagated, not handled.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_message_holds_full_magnitude() {
        // i32::MIN has no i32 counterpart; unsigned_abs keeps the magnitude.
        let err = LedgerError::InsufficientFunds {
            requested: i32::MIN.unsigned_abs(),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: redeeming 2147483648 units would overdraw the available balance"
        );
    }
}
