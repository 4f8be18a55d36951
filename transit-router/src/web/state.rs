//! Application state for the web layer.

use std::sync::Arc;

use crate::router::TransitRouter;

/// Shared application state.
///
/// The router is fully built before the state exists and is only read
/// afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Transit network and its solved route graph
    pub router: Arc<TransitRouter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(router: TransitRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
