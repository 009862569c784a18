//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendee_repo;
pub mod competition_repo;
pub mod redeemable_repo;
pub mod transaction_repo;

pub use attendee_repo::AttendeeRepo;
pub use competition_repo::CompetitionRepo;
pub use redeemable_repo::RedeemableRepo;
pub use transaction_repo::TransactionRepo;
