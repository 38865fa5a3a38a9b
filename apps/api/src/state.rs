use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything in here is immutable or stateless: each analysis request is an
/// independent round trip, so there is no per-request state to share and no
/// module-level singletons anywhere in the crate.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis backend. Production wires `LlmAnalyzer`; tests swap
    /// in deterministic stubs.
    pub analyzer: Arc<dyn Analyzer>,
    pub config: Config,
}
