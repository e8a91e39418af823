//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The AI transport itself failed (network, rejected request, ...)
#[derive(Error, Debug, Clone, PartialEq)]
#[error("AI transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Recoverable AI-assist failures; the composition is never touched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    #[error("AI response did not contain a JSON object")]
    MalformedResponse,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("No section is selected")]
    NoSelection,

    #[error("An AI request for section {0} is already pending")]
    AlreadyPending(String),

    /// The request was cancelled or its section removed before the response arrived
    #[error("AI request {0} is no longer wanted")]
    Discarded(String),
}

impl AiError {
    /// Message to show the operator
    pub fn guidance(&self) -> &'static str {
        match self {
            AiError::MalformedResponse => {
                "AI returned an invalid response. Try again with a simpler prompt."
            }
            AiError::Transport(_) => "Failed to generate content. Please try again.",
            AiError::NoSelection => "Select a section to rewrite first.",
            AiError::AlreadyPending(_) => "A rewrite for this section is already in progress.",
            AiError::Discarded(_) => "The section changed before the AI response arrived.",
        }
    }
}
