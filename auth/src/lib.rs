//! Authentication utilities library
//!
//! Provides the credential lifecycle for the identity service:
//! - Password policy validation (structural rules, all violations reported)
//! - Password hashing (Argon2id)
//! - Bearer token generation and validation (JWT, fixed 30-minute window)
//! - Authentication coordination
//!
//! Everything in this crate is synchronous and CPU-bound; callers running on
//! an async runtime are expected to offload hashing to a blocking worker.
//!
//! # Examples
//!
//! ## Password Policy
//! ```
//! use auth::PasswordPolicy;
//!
//! assert!(PasswordPolicy::validate("Str0ng&Pass").is_ok());
//! let violations = PasswordPolicy::validate("weak").unwrap_err();
//! assert!(!violations.is_empty());
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! assert!(auth.verify_password("password123", &hash).unwrap());
//! let claims = Claims::for_user("user123", "alice".to_string());
//! let token = auth.issue_token(&claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::PolicyViolation;
