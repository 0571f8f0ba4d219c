use std::sync::Arc;

use identity::IdentityProvider;

/// Shared, read-only application state handed to every request.
#[derive(Clone)]
pub struct AppState {
    identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }
}
