use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::PasswordPolicy;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserDirectory;

/// Authentication service implementation.
///
/// Orchestrates request validation, password hashing, the user directory,
/// and token issuance. Each call is stateless request-to-response; the only
/// shared state is the read-only authenticator.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User persistence implementation
    /// * `authenticator` - Shared hashing and token coordinator
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }
}

/// Reject absent or blank required fields.
fn required(value: Option<String>, field: &'static str) -> Result<String, AuthError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AuthError::MissingField(field)),
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        let name = required(command.name, "name")?;
        let email = required(command.email, "email")?;
        let password = required(command.password, "password")?;

        if command.confirm_password.as_deref() != Some(password.as_str()) {
            return Err(AuthError::PasswordMismatch);
        }

        let email = EmailAddress::new(email)?;

        PasswordPolicy::validate(&password).map_err(AuthError::WeakPassword)?;

        if self.directory.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::DuplicateEmail(email.as_str().to_string()));
        }

        let name = DisplayName::new(name).map_err(|_| AuthError::MissingField("name"))?;

        // Argon2 is deliberately slow; keep it off the async workers
        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))?
                .map_err(|e| AuthError::Internal(format!("Password hashing failed: {e}")))?;

        let user = self.directory.create(&name, &email, &password_hash).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let email = required(command.email, "email")?;
        let password = required(command.password, "password")?;

        let email = EmailAddress::new(email)?;

        let user = self
            .directory
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.as_str().to_string()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || {
            authenticator.verify_password(&password, &stored_hash)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?
        .map_err(|e| AuthError::Internal(format!("Password verification failed: {e}")))?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::for_user(user.id, user.name.as_str().to_string());
        let token = self
            .authenticator
            .issue_token(&claims)
            .map_err(|e| AuthError::Internal(format!("Token issuance failed: {e}")))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    async fn profile(&self, id: &UserId) -> Result<UserProfile, AuthError> {
        self.directory
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(id.to_string()))
    }
}
