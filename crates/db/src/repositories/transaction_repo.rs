//! Repository for the `transactions` ledger table.
//!
//! The append path is split in two:
//!
//! - Grants (positive delta) insert directly. A positive delta can never
//!   take the balance below zero, so no state is read first.
//! - Redemptions (negative delta) run inside a database transaction that
//!   locks the redeemable row with `SELECT ... FOR UPDATE`, recomputes the
//!   balance, and only inserts if the projected balance stays non-negative.
//!   The row lock serializes concurrent redemptions on the same
//!   (competition_code, name) key; redemptions against other redeemables
//!   are not blocked.

use hackdesk_core::error::CoreError;
use hackdesk_core::ledger::{projected_balance, validate_delta};
use hackdesk_core::pagination::SortOrder;
use hackdesk_core::types::DbId;
use sqlx::PgPool;

use crate::error::LedgerError;
use crate::models::transaction::{
    CreateTransaction, Transaction, TransactionFilter, TransactionWithDetails,
};

/// Column list for transactions queries.
const COLUMNS: &str = "id, competition_code, redeemable_name, user_id, quantity, transacted_at";

/// Provides append, lookup, listing, and delete operations for the ledger.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Append a transaction to the ledger.
    ///
    /// Returns the committed row, or an explicit business failure:
    /// [`LedgerError::Validation`] for a zero delta,
    /// [`LedgerError::NotFound`] when the redeemable or attendee is missing,
    /// [`LedgerError::InsufficientFunds`] when a redemption would overdraw.
    /// On any failure no row is written.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, LedgerError> {
        validate_delta(input.quantity).map_err(|e| match e {
            CoreError::Validation(msg) => LedgerError::Validation(msg),
            other => LedgerError::Validation(other.to_string()),
        })?;

        if input.quantity > 0 {
            Self::insert_grant(pool, input).await
        } else {
            Self::insert_redemption(pool, input).await
        }
    }

    /// Fast path: a grant needs no balance check, only referential checks,
    /// which the foreign keys provide.
    async fn insert_grant(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, LedgerError> {
        let query = format!(
            "INSERT INTO transactions (competition_code, redeemable_name, user_id, quantity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Transaction>(&query)
            .bind(&input.competition_code)
            .bind(&input.redeemable_name)
            .bind(&input.user_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await;

        match result {
            Ok(row) => Ok(row),
            Err(err) if crate::is_foreign_key_violation(&err) => Err(LedgerError::NotFound {
                entity: "Redeemable or attendee",
                key: format!(
                    "{}/{} for user '{}'",
                    input.competition_code, input.redeemable_name, input.user_id
                ),
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Slow path: check-then-insert under a row lock on the redeemable.
    ///
    /// Dropping the transaction without committing (any early return) rolls
    /// everything back, so a rejected redemption leaves no trace.
    async fn insert_redemption(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, LedgerError> {
        let mut tx = pool.begin().await?;

        let baseline: Option<(i32,)> = sqlx::query_as(
            "SELECT quantity FROM redeemables
             WHERE competition_code = $1 AND name = $2
             FOR UPDATE",
        )
        .bind(&input.competition_code)
        .bind(&input.redeemable_name)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((baseline,)) = baseline else {
            return Err(LedgerError::NotFound {
                entity: "Redeemable",
                key: format!("{}/{}", input.competition_code, input.redeemable_name),
            });
        };

        let attendee: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM attendees WHERE id = $1")
                .bind(&input.user_id)
                .fetch_optional(&mut *tx)
                .await?;
        if attendee.is_none() {
            return Err(LedgerError::NotFound {
                entity: "Attendee",
                key: input.user_id.clone(),
            });
        }

        let (committed_sum,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(quantity), 0) FROM transactions
             WHERE competition_code = $1 AND redeemable_name = $2",
        )
        .bind(&input.competition_code)
        .bind(&input.redeemable_name)
        .fetch_one(&mut *tx)
        .await?;

        if projected_balance(baseline, committed_sum, input.quantity) < 0 {
            tracing::debug!(
                competition_code = %input.competition_code,
                redeemable_name = %input.redeemable_name,
                user_id = %input.user_id,
                quantity = input.quantity,
                "Redemption rejected: would overdraw balance"
            );
            return Err(LedgerError::InsufficientFunds {
                requested: input.quantity.unsigned_abs(),
            });
        }

        let query = format!(
            "INSERT INTO transactions (competition_code, redeemable_name, user_id, quantity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Transaction>(&query)
            .bind(&input.competition_code)
            .bind(&input.redeemable_name)
            .bind(&input.user_id)
            .bind(input.quantity)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Find a transaction by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Effective balance for a redeemable: baseline quantity plus the sum of
    /// all committed deltas. Returns `None` if the redeemable is missing.
    pub async fn balance(
        pool: &PgPool,
        competition_code: &str,
        name: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT r.quantity + COALESCE(
                 (SELECT SUM(t.quantity) FROM transactions t
                  WHERE t.competition_code = r.competition_code
                    AND t.redeemable_name = r.name),
                 0)
             FROM redeemables r
             WHERE r.competition_code = $1 AND r.name = $2",
        )
        .bind(competition_code)
        .bind(name)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(balance,)| balance))
    }

    /// Delete a transaction by id. Returns `true` if a row was deleted.
    ///
    /// Administrative correction tool: the remaining ledger is not
    /// re-validated. Under current semantics that is safe, since removing
    /// a delta never takes any past balance below what was checked.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List transactions with optional filters and keyset pagination,
    /// enriched with attendee and redeemable display fields.
    ///
    /// Rows are ordered by (transacted_at, id) in the requested direction.
    /// The cursor is the id of the last-seen transaction; its timestamp is
    /// resolved inside the query so the page starts strictly past that row.
    /// An unknown cursor id behaves as no cursor.
    pub async fn list(
        pool: &PgPool,
        filter: &TransactionFilter,
        cursor: Option<DbId>,
        limit: i64,
        sort: SortOrder,
    ) -> Result<Vec<TransactionWithDetails>, sqlx::Error> {
        let cmp = match sort {
            SortOrder::Asc => ">",
            SortOrder::Desc => "<",
        };
        let dir = sort.as_sql();
        let query = format!(
            "SELECT t.id, t.competition_code, t.redeemable_name, t.user_id,
                    t.quantity, t.transacted_at,
                    a.display_name AS attendee_name,
                    r.description AS redeemable_description
             FROM transactions t
             JOIN attendees a ON a.id = t.user_id
             JOIN redeemables r
               ON r.competition_code = t.competition_code
              AND r.name = t.redeemable_name
             WHERE ($1::TEXT IS NULL OR t.competition_code = $1)
               AND ($2::TEXT IS NULL OR t.user_id = $2)
               AND ($3::TEXT IS NULL OR t.redeemable_name = $3)
               AND ($4::BIGINT IS NULL
                    OR NOT EXISTS (SELECT 1 FROM transactions c WHERE c.id = $4)
                    OR (t.transacted_at, t.id) {cmp}
                       ((SELECT c.transacted_at FROM transactions c WHERE c.id = $4),
                        $4::BIGINT))
             ORDER BY t.transacted_at {dir}, t.id {dir}
             LIMIT $5"
        );
        sqlx::query_as::<_, TransactionWithDetails>(&query)
            .bind(&filter.competition_code)
            .bind(&filter.user_id)
            .bind(&filter.redeemable_name)
            .bind(cursor)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
