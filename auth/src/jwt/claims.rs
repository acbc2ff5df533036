use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// How long an issued token stays valid.
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Identity claims carried by a bearer token.
///
/// A token is self-contained: subject, display name, and the issuance and
/// expiry timestamps are all the state the service keeps about a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Display name of the subject
    pub name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user.
    ///
    /// Expiry is fixed at [`TOKEN_TTL_MINUTES`] from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `name` - Display name
    ///
    /// # Returns
    /// Claims with sub, name, iat, and exp set
    pub fn for_user(user_id: impl ToString, name: String) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(TOKEN_TTL_MINUTES);

        Self {
            sub: user_id.to_string(),
            name,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "alice".to_string());

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            name: "alice".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
