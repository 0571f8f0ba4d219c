use std::fmt;

/// Auth domain assumed when the platform does not supply one.
pub const DEFAULT_AUTH_DOMAIN: &str = "gmail.com";

/// An authenticated user as reported by the identity platform.
///
/// Only valid for the request it was resolved in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub auth_domain: String,
    pub user_id: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            auth_domain: DEFAULT_AUTH_DOMAIN.to_string(),
            user_id: None,
        }
    }

    pub fn with_auth_domain(mut self, auth_domain: impl Into<String>) -> Self {
        self.auth_domain = auth_domain.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Portion of the email before the `@`, or the whole email if there is none.
    pub fn nickname(&self) -> &str {
        match self.email.split_once('@') {
            Some((local, domain)) if domain == self.auth_domain => local,
            _ => &self.email,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// Log formatting for a possibly absent user: the email, or `null`.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser<'a>(pub Option<&'a User>);

impl fmt::Display for CurrentUser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(user) => write!(f, "{user}"),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_email() {
        let user = User::new("alice@example.com").with_user_id("1234");
        assert_eq!(user.to_string(), "alice@example.com");
    }

    #[test]
    fn test_current_user_renders_null_when_absent() {
        assert_eq!(CurrentUser(None).to_string(), "null");

        let user = User::new("bob@example.com");
        assert_eq!(CurrentUser(Some(&user)).to_string(), "bob@example.com");
    }

    #[test]
    fn test_nickname_strips_matching_domain_only() {
        let user = User::new("alice@example.com").with_auth_domain("example.com");
        assert_eq!(user.nickname(), "alice");

        let other = User::new("alice@example.com");
        assert_eq!(other.nickname(), "alice@example.com");
    }
}
