//! Server application state

use crate::assistant::PostAssistant;

/// Shared application state for all route handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: PostAssistant,
    /// Reported by the liveness probe
    pub service_name: String,
}

impl AppState {
    pub fn new(assistant: PostAssistant) -> Self {
        Self {
            assistant,
            service_name: "Postwright AI Service".to_string(),
        }
    }
}
