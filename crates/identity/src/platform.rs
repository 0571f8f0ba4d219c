//! Identity injected by the fronting platform as request headers.
//!
//! The platform strips these headers from client traffic and sets them after
//! authenticating the session, so their presence is taken at face value.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue, request::Parts};
use utils::env::parse_bool;

use crate::{
    service::{IdentityError, IdentityProvider, UserService, continue_url},
    user::User,
};

pub const USER_EMAIL_HEADER: &str = "x-appengine-user-email";
pub const AUTH_DOMAIN_HEADER: &str = "x-appengine-auth-domain";
pub const USER_ID_HEADER: &str = "x-appengine-user-id";
pub const USER_IS_ADMIN_HEADER: &str = "x-appengine-user-is-admin";

pub const DEFAULT_LOGIN_PATH: &str = "/_ah/login";
pub const DEFAULT_LOGOUT_PATH: &str = "/_ah/logout";

#[derive(Debug, Clone)]
pub struct PlatformHeaders {
    login_path: String,
    logout_path: String,
}

impl Default for PlatformHeaders {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH, DEFAULT_LOGOUT_PATH)
    }
}

impl PlatformHeaders {
    pub fn new(login_path: impl Into<String>, logout_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            logout_path: logout_path.into(),
        }
    }
}

impl IdentityProvider for PlatformHeaders {
    fn user_service(&self, request: &Parts) -> Arc<dyn UserService> {
        Arc::new(HeaderUserService {
            email: header(&request.headers, USER_EMAIL_HEADER),
            auth_domain: header(&request.headers, AUTH_DOMAIN_HEADER),
            user_id: header(&request.headers, USER_ID_HEADER),
            is_admin: header(&request.headers, USER_IS_ADMIN_HEADER),
            login_path: self.login_path.clone(),
            logout_path: self.logout_path.clone(),
        })
    }
}

fn header(headers: &HeaderMap, name: &'static str) -> Option<HeaderValue> {
    headers.get(name).cloned()
}

/// Snapshot of one request's identity headers.
struct HeaderUserService {
    email: Option<HeaderValue>,
    auth_domain: Option<HeaderValue>,
    user_id: Option<HeaderValue>,
    is_admin: Option<HeaderValue>,
    login_path: String,
    logout_path: String,
}

fn read(value: &Option<HeaderValue>, name: &'static str) -> Result<Option<String>, IdentityError> {
    match value {
        None => Ok(None),
        Some(v) => {
            let s = v
                .to_str()
                .map_err(|_| {
                    tracing::warn!(header = name, "Identity header is not valid UTF-8");
                    IdentityError::MalformedHeader { header: name }
                })?
                .trim();
            Ok((!s.is_empty()).then(|| s.to_string()))
        }
    }
}

#[async_trait]
impl UserService for HeaderUserService {
    async fn current_user(&self) -> Result<Option<User>, IdentityError> {
        let Some(email) = read(&self.email, USER_EMAIL_HEADER)? else {
            return Ok(None);
        };

        let mut user = User::new(email);
        if let Some(domain) = read(&self.auth_domain, AUTH_DOMAIN_HEADER)? {
            user = user.with_auth_domain(domain);
        }
        if let Some(id) = read(&self.user_id, USER_ID_HEADER)? {
            user = user.with_user_id(id);
        }
        Ok(Some(user))
    }

    async fn is_user_admin(&self) -> Result<bool, IdentityError> {
        if self.current_user().await?.is_none() {
            return Err(IdentityError::NotLoggedIn);
        }
        let flag = read(&self.is_admin, USER_IS_ADMIN_HEADER)?;
        Ok(flag.as_deref().and_then(parse_bool).unwrap_or(false))
    }

    fn create_login_url(&self, destination: &str) -> String {
        continue_url(&self.login_path, destination)
    }

    fn create_logout_url(&self, destination: &str) -> String {
        continue_url(&self.logout_path, destination)
    }
}
