use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from a raw request payload.
    ///
    /// Runs the full validation chain: required fields, password
    /// confirmation, email format, password policy, duplicate email.
    ///
    /// # Arguments
    /// * `command` - Raw registration payload
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `MissingField` - Name, email, or password absent or blank
    /// * `PasswordMismatch` - Confirmation does not match the password
    /// * `InvalidEmail` - Email fails format validation
    /// * `WeakPassword` - Password violates the policy (all rules listed)
    /// * `DuplicateEmail` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `command` - Raw login payload
    ///
    /// # Returns
    /// Signed token carrying the user's id and display name
    ///
    /// # Errors
    /// * `MissingField` - Email or password absent or blank
    /// * `InvalidEmail` - Email fails format validation
    /// * `UserNotFound` - No account with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Internal` - Verification or token issuance failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Retrieve a user's public profile by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Profile without the password hash
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `Internal` - Storage operation failed
    async fn profile(&self, id: &UserId) -> Result<UserProfile, AuthError>;
}

/// Persistence boundary for user records. Store-agnostic.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve the full user record by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional user entity, password hash included (None if not found)
    ///
    /// # Errors
    /// * `Internal` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve a user's public profile by identifier.
    ///
    /// The password hash is excluded at the query level, not filtered
    /// after the fact.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional profile (None if not found)
    ///
    /// # Errors
    /// * `Internal` - Storage operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, AuthError>;

    /// Persist a new user record.
    ///
    /// The store assigns the identifier and creation timestamp.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password_hash` - Hashed password (never the plaintext)
    ///
    /// # Returns
    /// Created user entity with store-assigned id
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered (unique constraint)
    /// * `Internal` - Storage operation failed
    async fn create(
        &self,
        name: &DisplayName,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, AuthError>;
}
