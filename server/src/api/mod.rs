pub mod handlers;
pub mod pages;
pub mod server;

use std::sync::Arc;

use crate::config::SlugSettings;
use crate::store::KvStore;

/// Shared state for all HTTP handlers: the injected store plus the slug
/// generation settings. Nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub slugs: Arc<SlugSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>, slugs: SlugSettings) -> Self {
        AppState {
            store,
            slugs: Arc::new(slugs),
        }
    }
}
