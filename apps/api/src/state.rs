use std::sync::Arc;

use crate::config::Config;
use crate::matches::store::MatchStore;
use crate::matching_client::MatchingService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match source. HTTP-backed when `MATCHING_SERVICE_URL` is set.
    pub matching: Arc<dyn MatchingService>,
    /// Most recently received match set, replaced wholesale on every new run.
    pub store: MatchStore,
}
