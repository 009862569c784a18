//! Repository for the `competitions` table.

use sqlx::PgPool;

use crate::models::competition::{Competition, CreateCompetition};

/// Column list for competitions queries.
const COLUMNS: &str = "code, name, created_at";

/// Provides CRUD operations for competitions.
pub struct CompetitionRepo;

impl CompetitionRepo {
    /// Insert a new competition, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCompetition,
    ) -> Result<Competition, sqlx::Error> {
        let query = format!(
            "INSERT INTO competitions (code, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Competition>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a competition by its code.
    pub async fn find_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<Competition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM competitions WHERE code = $1");
        sqlx::query_as::<_, Competition>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all competitions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Competition>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competitions ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Competition>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a competition by code. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM competitions WHERE code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
