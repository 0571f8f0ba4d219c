use std::sync::Arc;

use async_trait::async_trait;
use axum::http::request::Parts;
use thiserror::Error;

use crate::user::User;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Malformed identity header: {header}")]
    MalformedHeader { header: &'static str },
    #[error("No user is signed in")]
    NotLoggedIn,
}

/// Request-scoped view of the identity platform.
#[async_trait]
pub trait UserService: Send + Sync {
    /// The signed-in user for this request, or `None` when anonymous.
    async fn current_user(&self) -> Result<Option<User>, IdentityError>;

    async fn is_user_logged_in(&self) -> Result<bool, IdentityError> {
        Ok(self.current_user().await?.is_some())
    }

    /// Fails with [`IdentityError::NotLoggedIn`] for anonymous requests.
    async fn is_user_admin(&self) -> Result<bool, IdentityError>;

    fn create_login_url(&self, destination: &str) -> String;

    fn create_logout_url(&self, destination: &str) -> String;
}

/// Hands out a [`UserService`] bound to a single request.
pub trait IdentityProvider: Send + Sync + 'static {
    fn user_service(&self, request: &Parts) -> Arc<dyn UserService>;
}

/// `<path>?continue=<destination>` with the destination percent-encoded.
pub(crate) fn continue_url(path: &str, destination: &str) -> String {
    format!("{}?continue={}", path, urlencoding::encode(destination))
}
