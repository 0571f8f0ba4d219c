//! Process configuration, read once at startup from the environment.

use std::sync::Arc;

use identity::{
    FixedIdentity, IdentityProvider, PlatformHeaders, User,
    platform::{DEFAULT_LOGIN_PATH, DEFAULT_LOGOUT_PATH},
};
use thiserror::Error;
use utils::env::{clean, parse_bool};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Unknown identity backend: {0} (expected `headers` or `fixed`)")]
    UnknownBackend(String),
    #[error("Invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityBackend {
    /// Trust identity headers set by the fronting platform.
    Headers,
    /// Every request resolves to the same user, or to nobody.
    Fixed {
        email: Option<String>,
        auth_domain: Option<String>,
        is_admin: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    /// `0` asks the OS for a free port.
    pub port: u16,
    pub log_level: String,
    pub identity: IdentityBackend,
    pub login_path: String,
    pub logout_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| clean(&v)).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match var("BACKEND_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 0,
        };
        let log_level = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let identity = match var("IDENTITY_BACKEND").as_deref() {
            None | Some("headers") => IdentityBackend::Headers,
            Some("fixed") => {
                let is_admin = match var("FIXED_USER_IS_ADMIN") {
                    Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                        name: "FIXED_USER_IS_ADMIN",
                        value: raw,
                    })?,
                    None => false,
                };
                IdentityBackend::Fixed {
                    email: var("FIXED_USER_EMAIL"),
                    auth_domain: var("FIXED_USER_AUTH_DOMAIN"),
                    is_admin,
                }
            }
            Some(other) => return Err(ConfigError::UnknownBackend(other.to_string())),
        };
        let login_path = var("LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        let logout_path = var("LOGOUT_PATH").unwrap_or_else(|| DEFAULT_LOGOUT_PATH.to_string());

        Ok(Self {
            host,
            port,
            log_level,
            identity,
            login_path,
            logout_path,
        })
    }

    pub fn identity_provider(&self) -> Arc<dyn IdentityProvider> {
        match &self.identity {
            IdentityBackend::Headers => {
                Arc::new(PlatformHeaders::new(&self.login_path, &self.logout_path))
            }
            IdentityBackend::Fixed {
                email: Some(email),
                auth_domain,
                is_admin,
            } => {
                let mut user = User::new(email);
                if let Some(domain) = auth_domain {
                    user = user.with_auth_domain(domain);
                }
                Arc::new(
                    FixedIdentity::signed_in(user, *is_admin)
                        .with_paths(&self.login_path, &self.logout_path),
                )
            }
            IdentityBackend::Fixed { email: None, .. } => Arc::new(
                FixedIdentity::anonymous().with_paths(&self.login_path, &self.logout_path),
            ),
        }
    }
}
