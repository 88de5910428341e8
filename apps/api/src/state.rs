use std::sync::Arc;

use crate::transform::generator::VariationGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `GeminiVariationGenerator`.
    pub generator: Arc<dyn VariationGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn VariationGenerator>) -> Self {
        Self { generator }
    }
}
