//! Handler types and dependencies

use crate::session::SessionStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
///
/// Owned by the dispatcher schema and cloned into each endpoint; a test can
/// build one around a fresh store and inspect it after dispatching.
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: SessionStore,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }
}
