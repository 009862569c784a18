//! Balance arithmetic for the transaction ledger.
//!
//! A redeemable's balance at any point is its baseline `quantity` plus the
//! sum of all committed transaction deltas. A redemption (negative delta)
//! may only commit if the projected balance stays non-negative; a grant
//! (positive delta) can never violate that and skips the check entirely.

use crate::error::CoreError;

/// Validate a transaction delta. A zero delta is meaningless and rejected
/// before any I/O happens.
pub fn validate_delta(quantity: i32) -> Result<(), CoreError> {
    if quantity == 0 {
        return Err(CoreError::Validation(
            "quantity must not be zero".to_string(),
        ));
    }
    Ok(())
}

/// Balance the redeemable would have after applying `delta` on top of its
/// baseline quantity and the sum of already-committed deltas.
///
/// Widened to i64 so pathological grant histories cannot overflow.
pub fn projected_balance(baseline: i32, committed_sum: i64, delta: i32) -> i64 {
    i64::from(baseline) + committed_sum + i64::from(delta)
}
