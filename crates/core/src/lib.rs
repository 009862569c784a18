//! Domain logic for the hackdesk redeemable ledger.
//!
//! This crate is I/O-free: validation rules, pagination primitives, and the
//! shared error type live here so both the persistence layer and the HTTP
//! layer agree on what a valid request looks like.

pub mod error;
pub mod ledger;
pub mod pagination;
pub mod redeemable;
pub mod types;
