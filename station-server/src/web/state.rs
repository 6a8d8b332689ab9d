//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationSource;

/// Shared application state.
///
/// Holds only the station source; stations themselves are loaded per request.
#[derive(Clone)]
pub struct AppState {
    /// Where stations are loaded from
    pub source: Arc<dyn StationSource + Send + Sync>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: impl StationSource + Send + Sync + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}
