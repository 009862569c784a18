//! Repository for the `redeemables` catalog table.

use hackdesk_core::pagination::{RedeemableCursor, SortOrder};
use sqlx::PgPool;

use crate::models::redeemable::{CreateRedeemable, Redeemable, UpdateRedeemable};

/// Column list for redeemables queries.
const COLUMNS: &str = "id, competition_code, name, quantity, description, created_at";

/// Provides CRUD and listing operations for the redeemable catalog.
pub struct RedeemableRepo;

impl RedeemableRepo {
    /// Insert a new redeemable, returning the created row.
    ///
    /// Surfaces a unique violation if the (competition_code, name) pair is
    /// taken and a foreign key violation if the competition does not exist;
    /// callers map those to conflict / not-found.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRedeemable,
    ) -> Result<Redeemable, sqlx::Error> {
        let query = format!(
            "INSERT INTO redeemables (competition_code, name, quantity, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Redeemable>(&query)
            .bind(&input.competition_code)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a redeemable by its logical identity.
    pub async fn find(
        pool: &PgPool,
        competition_code: &str,
        name: &str,
    ) -> Result<Option<Redeemable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM redeemables
             WHERE competition_code = $1 AND name = $2"
        );
        sqlx::query_as::<_, Redeemable>(&query)
            .bind(competition_code)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Patch a redeemable's quantity and/or description. Returns the updated
    /// row, or `None` if the identity pair does not exist.
    pub async fn update(
        pool: &PgPool,
        competition_code: &str,
        name: &str,
        input: &UpdateRedeemable,
    ) -> Result<Option<Redeemable>, sqlx::Error> {
        let query = format!(
            "UPDATE redeemables SET
                quantity = COALESCE($3, quantity),
                description = COALESCE($4, description)
             WHERE competition_code = $1 AND name = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Redeemable>(&query)
            .bind(competition_code)
            .bind(name)
            .bind(input.quantity)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a redeemable. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign key violation if transactions still reference
    /// the redeemable; the ledger history is never cascaded away.
    pub async fn delete(
        pool: &PgPool,
        competition_code: &str,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM redeemables WHERE competition_code = $1 AND name = $2")
                .bind(competition_code)
                .bind(name)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List redeemables with optional filters and keyset pagination.
    ///
    /// Rows are ordered by name then competition_code in the requested
    /// direction. The cursor is the identity pair of the last-seen row and
    /// is exclusive: the page starts strictly past it.
    pub async fn list(
        pool: &PgPool,
        competition_code: Option<&str>,
        name: Option<&str>,
        cursor: Option<&RedeemableCursor>,
        limit: i64,
        sort: SortOrder,
    ) -> Result<Vec<Redeemable>, sqlx::Error> {
        // The cursor comparison must run in the same direction as the sort:
        // ascending pages advance with >, descending pages with <.
        let cmp = match sort {
            SortOrder::Asc => ">",
            SortOrder::Desc => "<",
        };
        let dir = sort.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM redeemables
             WHERE ($1::TEXT IS NULL OR competition_code = $1)
               AND ($2::TEXT IS NULL OR name = $2)
               AND ($3::TEXT IS NULL OR (name, competition_code) {cmp} ($4::TEXT, $3::TEXT))
             ORDER BY name {dir}, competition_code {dir}
             LIMIT $5"
        );
        sqlx::query_as::<_, Redeemable>(&query)
            .bind(competition_code)
            .bind(name)
            .bind(cursor.map(|c| c.competition_code.as_str()))
            .bind(cursor.map(|c| c.name.as_str()))
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
