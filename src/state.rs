//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::UrlStorage;

/// State shared by all handlers.
///
/// Holds the storage port only; handlers keep nothing else between requests.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn UrlStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn UrlStorage>) -> Self {
        Self { storage }
    }
}
