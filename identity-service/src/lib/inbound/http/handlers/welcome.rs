use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Public landing route; doubles as a liveness probe.
pub async fn welcome() -> ApiSuccess<WelcomeResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        WelcomeResponseData {
            msg: "Identity service up and running".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeResponseData {
    pub msg: String,
}
