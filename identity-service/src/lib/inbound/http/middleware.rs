use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store verified token claims in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
}

/// Middleware that validates bearer tokens and attaches the verified
/// claims to the request for downstream handlers.
///
/// A missing or malformed `Authorization` header is rejected as
/// unauthorized; a token that fails verification gets one uniform
/// invalid-token rejection, whatever the actual failure was.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req).map_err(reject)?;

    // Validate signature and expiry (from auth library)
    let claims = state
        .authenticator
        .validate_token(token)
        .map_err(|_| reject(AuthError::InvalidToken))?;

    // A verified token with an unparseable subject gets the same rejection
    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Verified token carried a malformed subject");
        reject(AuthError::InvalidToken)
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
    });

    Ok(next.run(req).await)
}

fn reject(err: AuthError) -> Response {
    ApiError::from(err).into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, AuthError> {
    let auth_str = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(AuthError::Unauthorized)?
        .to_str()
        .map_err(|_| AuthError::Unauthorized)?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthorized)
}
