//! Development backend that signs every request in as the same user.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::request::Parts;

use crate::{
    platform::{DEFAULT_LOGIN_PATH, DEFAULT_LOGOUT_PATH},
    service::{IdentityError, IdentityProvider, UserService, continue_url},
    user::User,
};

#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user: Option<User>,
    is_admin: bool,
    login_path: String,
    logout_path: String,
}

impl FixedIdentity {
    pub fn signed_in(user: User, is_admin: bool) -> Self {
        Self {
            user: Some(user),
            is_admin,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            logout_path: DEFAULT_LOGOUT_PATH.to_string(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_admin: false,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            logout_path: DEFAULT_LOGOUT_PATH.to_string(),
        }
    }

    pub fn with_paths(
        mut self,
        login_path: impl Into<String>,
        logout_path: impl Into<String>,
    ) -> Self {
        self.login_path = login_path.into();
        self.logout_path = logout_path.into();
        self
    }
}

impl IdentityProvider for FixedIdentity {
    fn user_service(&self, _request: &Parts) -> Arc<dyn UserService> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl UserService for FixedIdentity {
    async fn current_user(&self) -> Result<Option<User>, IdentityError> {
        Ok(self.user.clone())
    }

    async fn is_user_admin(&self) -> Result<bool, IdentityError> {
        match self.user {
            Some(_) => Ok(self.is_admin),
            None => Err(IdentityError::NotLoggedIn),
        }
    }

    fn create_login_url(&self, destination: &str) -> String {
        continue_url(&self.login_path, destination)
    }

    fn create_logout_url(&self, destination: &str) -> String {
        continue_url(&self.logout_path, destination)
    }
}
