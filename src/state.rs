//! Shared application state for all routes.

use crate::store::CafeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: CafeStore,
    /// Shared secret required by `DELETE /delete/:id`.
    pub delete_key: Arc<str>,
}

impl AppState {
    pub fn new(store: CafeStore, delete_key: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            delete_key: delete_key.into(),
        }
    }
}
