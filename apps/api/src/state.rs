use std::sync::Arc;

use crate::llm_client::TextGen;
use crate::pdf_export::PdfExporter;
use crate::wizard::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory wizard sessions. Dropped on shutdown by design.
    pub sessions: SessionStore,
    /// Pluggable text-generation backend. Default: GeminiClient.
    pub llm: Arc<dyn TextGen>,
    pub pdf: PdfExporter,
}
