//! Member repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use bookshop_core::{Email, MemberId};

use super::RepositoryError;
use crate::models::Member;

/// Internal row type for member queries.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i32,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MemberRow> for Member {
    type Error = RepositoryError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: MemberId::new(row.id),
            name: row.name,
            email,
            created_at: row.created_at,
        })
    }
}

/// Repository for member database operations.
pub struct MemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new member repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str, email: &Email) -> Result<Member, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r"
            INSERT INTO members (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            ",
        )
        .bind(name)
        .bind(email.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already registered".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// Get a member by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r"
            SELECT id, name, email, created_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List members with offset/limit pagination, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any row is invalid.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Member>, RepositoryError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r"
            SELECT id, name, email, created_at
            FROM members
            ORDER BY id
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
