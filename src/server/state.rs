//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::llm::OpenAiChat;

/// Shared application state.
pub struct AppState {
    /// Completion client for the remote analysis model.
    pub completions: OpenAiChat,
}

impl AppState {
    /// Create a new application state from the environment.
    ///
    /// # Errors
    /// Returns an error if the completion client cannot be created.
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let completions = OpenAiChat::from_env()
            .map_err(|e| format!("Failed to create completion client: {e}"))?;

        Ok(Arc::new(Self { completions }))
    }
}
