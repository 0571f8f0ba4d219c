use std::{convert::Infallible, sync::Arc};

use axum::{extract::FromRequestParts, http::request::Parts};
use identity::UserService;

use crate::AppState;

/// The identity service bound to the current request.
///
/// Resolving it does not query the platform; handlers decide when to ask.
pub struct RequestUserService(pub Arc<dyn UserService>);

impl FromRequestParts<AppState> for RequestUserService {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestUserService(state.identity().user_service(parts)))
    }
}
