use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserDirectory;

/// Postgres-backed user directory.
///
/// Identifiers and creation timestamps are assigned by the store; email
/// uniqueness is enforced by the `users_email_key` constraint, which is the
/// backstop for the service's check-then-create sequence.
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: impl std::fmt::Display) -> AuthError {
    AuthError::Internal(format!("Database error: {e}"))
}

fn user_from_row(row: &PgRow) -> Result<User, AuthError> {
    Ok(User {
        id: UserId(row.try_get("id").map_err(storage_error)?),
        name: DisplayName::new(row.try_get("name").map_err(storage_error)?)
            .map_err(storage_error)?,
        email: EmailAddress::new(row.try_get("email").map_err(storage_error)?)
            .map_err(storage_error)?,
        password_hash: row.try_get("password_hash").map_err(storage_error)?,
        created_at: row.try_get("created_at").map_err(storage_error)?,
    })
}

fn profile_from_row(row: &PgRow) -> Result<UserProfile, AuthError> {
    Ok(UserProfile {
        id: UserId(row.try_get("id").map_err(storage_error)?),
        name: DisplayName::new(row.try_get("name").map_err(storage_error)?)
            .map_err(storage_error)?,
        email: EmailAddress::new(row.try_get("email").map_err(storage_error)?)
            .map_err(storage_error)?,
        created_at: row.try_get("created_at").map_err(storage_error)?,
    })
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, AuthError> {
        // Password hash stays out of the projection
        let row = sqlx::query(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(profile_from_row).transpose()
    }

    async fn create(
        &self,
        name: &DisplayName,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
            "#,
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::DuplicateEmail(email.as_str().to_string());
                }
            }
            storage_error(e)
        })?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(storage_error)?),
            name: name.clone(),
            email: email.clone(),
            password_hash: password_hash.to_string(),
            created_at: row.try_get("created_at").map_err(storage_error)?,
        })
    }
}
