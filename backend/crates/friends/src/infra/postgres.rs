//! PostgreSQL Collection Implementation
//!
//! One row per friend in `friends`. The database assigns `friend_id`; `seq`
//! records insertion order. Single-document writes pick the oldest matching
//! row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::friend::Friend;
use crate::domain::repository::{FriendChanges, FriendCollection, FriendDocument, FriendFilter};
use crate::domain::value_object::{
    email::Email,
    friend_id::FriendId,
    friend_password::FriendPassword,
    friend_role::FriendRole,
    person_name::{FirstName, LastName},
};
use crate::error::{FriendError, FriendResult};

/// PostgreSQL-backed friend collection
#[derive(Clone)]
pub struct PgFriendCollection {
    pool: PgPool,
}

impl PgFriendCollection {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl FriendCollection for PgFriendCollection {
    async fn insert_one(&self, document: &FriendDocument) -> FriendResult<Option<FriendId>> {
        let friend_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO friends (
                first_name,
                last_name,
                email,
                password,
                role
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING friend_id
            "#,
        )
        .bind(document.first_name.as_str())
        .bind(document.last_name.as_str())
        .bind(document.email.as_str())
        .bind(document.password.as_phc_string())
        .bind(document.role.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(friend_id.map(FriendId::from_uuid))
    }

    async fn update_one(&self, filter: &FriendFilter, changes: &FriendChanges) -> FriendResult<u64> {
        let modified = sqlx::query(
            r#"
            UPDATE friends
            SET
                first_name = $2,
                last_name = $3,
                email = $4,
                password = $5
            WHERE friend_id = (
                SELECT friend_id
                FROM friends
                WHERE ($1::text IS NULL OR email = $1)
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(filter.email())
        .bind(changes.first_name.as_str())
        .bind(changes.last_name.as_str())
        .bind(changes.email.as_str())
        .bind(changes.password.as_phc_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?
        .rows_affected();

        Ok(modified)
    }

    async fn delete_one(&self, filter: &FriendFilter) -> FriendResult<u64> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM friends
            WHERE friend_id = (
                SELECT friend_id
                FROM friends
                WHERE ($1::text IS NULL OR email = $1)
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(filter.email())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted)
    }

    async fn find_one(&self, filter: &FriendFilter) -> FriendResult<Option<Friend>> {
        let row = sqlx::query_as::<_, FriendRow>(
            r#"
            SELECT
                friend_id,
                first_name,
                last_name,
                email,
                password,
                role
            FROM friends
            WHERE ($1::text IS NULL OR email = $1)
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(filter.email())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_friend()).transpose()
    }

    async fn find_all(&self, filter: &FriendFilter) -> FriendResult<Vec<Friend>> {
        let rows = sqlx::query_as::<_, FriendRow>(
            r#"
            SELECT
                friend_id,
                first_name,
                last_name,
                email,
                password,
                role
            FROM friends
            WHERE ($1::text IS NULL OR email = $1)
            ORDER BY seq
            "#,
        )
        .bind(filter.email())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_friend()).collect()
    }
}

/// Unique violation on `email` becomes a domain error
fn map_write_error(err: sqlx::Error) -> FriendError {
    if err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
    {
        FriendError::DuplicateEmail
    } else {
        FriendError::Database(err)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct FriendRow {
    friend_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: String,
}

impl FriendRow {
    fn into_friend(self) -> FriendResult<Friend> {
        let password = FriendPassword::from_phc_string(self.password)?;

        let role = FriendRole::from_code(&self.role).unwrap_or_else(|| {
            tracing::warn!(role = %self.role, "Unknown friend role, treating as user");
            FriendRole::default()
        });

        Ok(Friend {
            id: FriendId::from_uuid(self.friend_id),
            first_name: FirstName::from_db(self.first_name),
            last_name: LastName::from_db(self.last_name),
            email: Email::from_db(self.email),
            password,
            role,
        })
    }
}
