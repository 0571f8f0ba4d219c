//! Identity lookup for the current request.
//!
//! Handlers never resolve users themselves. They ask an [`IdentityProvider`] for a
//! [`UserService`] scoped to the request and query it.

pub mod fixed;
pub mod platform;
pub mod service;
pub mod user;

pub use fixed::FixedIdentity;
pub use platform::PlatformHeaders;
pub use service::{IdentityError, IdentityProvider, UserService};
pub use user::{CurrentUser, DEFAULT_AUTH_DOMAIN, User};
