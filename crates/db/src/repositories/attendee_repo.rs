//! Repository for the `attendees` table.

use sqlx::PgPool;

use crate::models::attendee::{Attendee, CreateAttendee};

/// Column list for attendees queries.
const COLUMNS: &str = "id, competition_code, display_name, email, checked_in, created_at";

/// Provides CRUD operations for attendees.
pub struct AttendeeRepo;

impl AttendeeRepo {
    /// Insert a new attendee, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAttendee,
    ) -> Result<Attendee, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendees (id, competition_code, display_name, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendee>(&query)
            .bind(&input.id)
            .bind(&input.competition_code)
            .bind(&input.display_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find an attendee by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<Attendee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendees WHERE id = $1");
        sqlx::query_as::<_, Attendee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List attendees for a competition, ordered by display name.
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_code: &str,
    ) -> Result<Vec<Attendee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendees
             WHERE competition_code = $1
             ORDER BY display_name ASC"
        );
        sqlx::query_as::<_, Attendee>(&query)
            .bind(competition_code)
            .fetch_all(pool)
            .await
    }

    /// Set an attendee's checked-in flag. Returns the updated row, or `None`
    /// if the attendee does not exist.
    pub async fn set_checked_in(
        pool: &PgPool,
        id: &str,
        checked_in: bool,
    ) -> Result<Option<Attendee>, sqlx::Error> {
        let query = format!(
            "UPDATE attendees SET checked_in = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendee>(&query)
            .bind(id)
            .bind(checked_in)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attendee by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
