use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Bearer token issuer and verifier.
///
/// Signs [`Claims`] with HS256 (HMAC with SHA-256) using a process-wide
/// secret loaded once at startup.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler from the signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a token string.
    ///
    /// # Arguments
    /// * `claims` - Identity claims to encode
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Checks the signature against the secret and the expiry against the
    /// current time. Every failure mode collapses to the same error.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    ///
    /// # Returns
    /// The decoded claims
    ///
    /// # Errors
    /// * `Invalid` - Signature invalid, token malformed, or expiry elapsed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is exact, no leeway window
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::jwt::claims::TOKEN_TTL_MINUTES;

    #[test]
    fn test_issue_and_verify() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = Claims::for_user("user123", "alice".to_string());
        let token = handler.issue(&claims).expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = handler.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_expiry_window_is_thirty_minutes() {
        let claims = Claims::for_user("user123", "alice".to_string());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_verify_malformed_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.verify("invalid.token.here");
        assert_eq!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = Claims::for_user("user123", "alice".to_string());
        let token = handler1.issue(&claims).expect("Failed to issue token");

        let result = handler2.verify(&token);
        assert_eq!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_verify_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user123".to_string(),
            name: "alice".to_string(),
            iat: now - 3600,
            exp: now - 60,
        };

        let token = handler.issue(&claims).expect("Failed to issue token");
        let result = handler.verify(&token);
        assert_eq!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_and_forged_tokens_fail_alike() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let other = JwtHandler::new(b"another_secret_32_bytes_long_key!!!");

        let now = Utc::now().timestamp();
        let expired = Claims {
            sub: "user123".to_string(),
            name: "alice".to_string(),
            iat: now - 3600,
            exp: now - 60,
        };
        let expired_token = handler.issue(&expired).expect("Failed to issue token");

        let live = Claims::for_user("user123", "alice".to_string());
        let forged_token = other.issue(&live).expect("Failed to issue token");

        // Same rejection either way
        assert_eq!(handler.verify(&expired_token), handler.verify(&forged_token));
    }
}
