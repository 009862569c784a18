//! Pagination primitives shared by the catalog and ledger list endpoints.
//!
//! Both listings use keyset (cursor) pagination: the cursor is the key of
//! the last-seen row and the next page starts strictly after it. Offsets
//! are never exposed.

use crate::error::CoreError;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Hard cap on page size.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Clamp an optional limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Sort direction for list endpoints. Defaults to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse a `sort` query parameter. Absent means [`SortOrder::Desc`].
    pub fn from_param(param: Option<&str>) -> Result<Self, CoreError> {
        match param {
            None => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(CoreError::Validation(format!(
                "sort must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

/// Cursor into the redeemable catalog: the composite key of the last-seen
/// row. Both halves must be present for the cursor to take effect; a
/// partially specified cursor behaves as no cursor at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemableCursor {
    pub competition_code: String,
    pub name: String,
}

impl RedeemableCursor {
    /// Assemble a cursor from the two optional query parameters.
    pub fn from_parts(
        competition_code: Option<String>,
        name: Option<String>,
    ) -> Option<Self> {
        match (competition_code, name) {
            (Some(competition_code), Some(name)) => Some(Self {
                competition_code,
                name,
            }),
            _ => None,
        }
    }
}
