//! Application state for dependency injection.

use std::sync::Arc;

use crate::clients::IdentityProvider;

/// Application state shared across handlers.
///
/// Built once at startup. Nothing in it changes afterwards, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Create new app state.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}
