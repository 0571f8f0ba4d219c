use axum::{Extension, http::StatusCode};
use identity::CurrentUser;

use crate::{
    error::ApiError,
    middleware::{RequestId, RequestUserService},
};

/// GET /
///
/// Looks up the signed-in user once and writes it to the log. The response is
/// an empty 200; lookup failures surface through [`ApiError`].
pub async fn log_current_user(
    Extension(request_id): Extension<RequestId>,
    RequestUserService(users): RequestUserService,
) -> Result<StatusCode, ApiError> {
    let user = users.current_user().await?;
    tracing::info!(
        request_id = %request_id,
        user = %CurrentUser(user.as_ref()),
        "current user"
    );
    Ok(StatusCode::OK)
}
