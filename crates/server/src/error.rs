use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use identity::IdentityError;
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_type) = match &self {
            ApiError::Identity(IdentityError::NotLoggedIn) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            ApiError::Identity(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IdentityError"),
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let error_message = format!("{}: {}", error_type, self);
        let response = ApiResponse::<()>::error(&error_message);
        (status_code, Json(response)).into_response()
    }
}
