use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password hashing and token handling.
///
/// Built once at process start from the signing secret and shared read-only
/// across requests; holds no other state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Returns
    /// True if the password matches
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Sign identity claims into a bearer token.
    ///
    /// # Arguments
    /// * `claims` - Identity claims to encode
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token(&self, claims: &Claims) -> Result<String, TokenError> {
        self.jwt_handler.issue(claims)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Arguments
    /// * `token` - Token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenError::Invalid` - Signature invalid, malformed, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.jwt_handler.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_credential_round_trip() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        assert!(authenticator
            .verify_password(password, &hash)
            .expect("Failed to verify password"));

        let claims = Claims::for_user("user123", "alice".to_string());
        let token = authenticator
            .issue_token(&claims)
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = authenticator
            .validate_token(&token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.name, "alice");
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        assert!(!authenticator
            .verify_password("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_validate_garbage_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
