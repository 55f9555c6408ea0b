use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The analysis pipeline itself is stateless; the only thing handlers need is
/// the configuration (upload directory, allowed extensions, limits).
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
