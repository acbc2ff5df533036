use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod get_user;
pub mod login;
pub mod register;
pub mod welcome;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    UnprocessableEntity {
        msg: String,
        info: Option<Vec<String>>,
    },
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorBody::new(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiErrorBody::new(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorBody::new(msg)),
            ApiError::UnprocessableEntity { msg, info } => {
                (StatusCode::UNPROCESSABLE_ENTITY, ApiErrorBody { msg, info })
            }
            ApiError::InternalServerError(detail) => {
                // Detail is for the logs; the caller gets a generic message
                tracing::error!(detail = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody::new("Something went wrong, please try again later".to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingField(_)
            | AuthError::PasswordMismatch
            | AuthError::InvalidEmail(_)
            | AuthError::DuplicateEmail(_)
            | AuthError::InvalidCredentials => ApiError::UnprocessableEntity {
                msg: err.to_string(),
                info: None,
            },
            AuthError::WeakPassword(ref violations) => ApiError::UnprocessableEntity {
                msg: err.to_string(),
                info: Some(violations.iter().map(ToString::to_string).collect()),
            },
            AuthError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            AuthError::Unauthorized => ApiError::Unauthorized(err.to_string()),
            AuthError::InvalidToken => ApiError::BadRequest(err.to_string()),
            AuthError::Internal(detail) => ApiError::InternalServerError(detail),
        }
    }
}

/// Wire shape of every error response: a message, plus the violated rules
/// for password policy failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<String>>,
}

impl ApiErrorBody {
    pub fn new(msg: String) -> Self {
        Self { msg, info: None }
    }
}

#[cfg(test)]
mod tests {
    use auth::PolicyViolation;

    use super::*;

    #[test]
    fn test_weak_password_carries_violation_list() {
        let err = AuthError::WeakPassword(vec![
            PolicyViolation::BadLength,
            PolicyViolation::MissingSymbol,
        ]);

        match ApiError::from(err) {
            ApiError::UnprocessableEntity { info, .. } => {
                let info = info.expect("expected violation list");
                assert_eq!(info.len(), 2);
                assert!(info[0].contains("characters"));
                assert!(info[1].contains("symbol"));
            }
            other => panic!("expected UnprocessableEntity, got {other:?}"),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(AuthError::UserNotFound("x".to_string())),
            ApiError::NotFound("User not found: x".to_string())
        );
        assert!(matches!(
            ApiError::from(AuthError::DuplicateEmail("a@b.com".to_string())),
            ApiError::UnprocessableEntity { .. }
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidToken),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::Unauthorized),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::Internal("db down".to_string())),
            ApiError::InternalServerError(_)
        ));
    }
}
