//! Request handlers, one module per resource.

pub mod attendee;
pub mod competition;
pub mod redeemable;
pub mod transaction;
