//! # AI Assist
//!
//! Request/response shapes for the completion transport and the proposal
//! an operator reviews before anything is merged.
//!
//! The transport is supplied by the host. Prompt wording is the host's
//! business too; this module only carries it.

use crate::ai_patch::{changed_keys, parse_completion};
use crate::errors::{AiError, TransportError};
use crate::store::Action;
use pagecraft_sections::Props;
use serde::{Deserialize, Serialize};
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl AiRequest {
    pub const DEFAULT_MAX_TOKENS: u32 = 2000;
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub content: String,
}

/// Completion backend supplied by the host
pub trait CompletionTransport {
    fn complete(
        &self,
        request: AiRequest,
    ) -> impl Future<Output = Result<AiResponse, TransportError>> + Send;
}

/// Proposed props for one section, with the keys that would change
#[derive(Debug, Clone, PartialEq)]
pub struct AiProposal {
    /// Instance id of the section the proposal targets
    pub target_id: String,
    pub proposed: Props,
    pub changed_keys: Vec<String>,
}

impl AiProposal {
    pub fn from_completion(
        target_id: impl Into<String>,
        current: &Props,
        content: &str,
    ) -> Result<Self, AiError> {
        let proposed = parse_completion(content)?;
        let changed_keys = changed_keys(current, &proposed);

        Ok(Self {
            target_id: target_id.into(),
            proposed,
            changed_keys,
        })
    }

    pub fn has_changes(&self) -> bool {
        !self.changed_keys.is_empty()
    }

    /// Action merging every changed key
    pub fn accept_all(&self) -> Action {
        self.accept(self.changed_keys.iter())
    }

    /// Action merging only the given keys
    pub fn accept<I, S>(&self, keys: I) -> Action
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Action::ApplyAiPatch {
            target_id: self.target_id.clone(),
            proposed: self.proposed.clone(),
            accepted_keys: keys.into_iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }
}

/// Run one completion round trip and build a proposal from it
pub async fn assist<T>(
    transport: &T,
    target_id: &str,
    current: &Props,
    request: AiRequest,
) -> Result<AiProposal, AiError>
where
    T: CompletionTransport,
{
    tracing::debug!(target_id, max_tokens = request.max_tokens, "requesting AI completion");
    let response = transport.complete(request).await?;
    AiProposal::from_completion(target_id, current, &response.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Canned(Result<&'static str, &'static str>);

    impl CompletionTransport for Canned {
        async fn complete(&self, _request: AiRequest) -> Result<AiResponse, TransportError> {
            self.0
                .map(|content| AiResponse { content: content.to_string() })
                .map_err(TransportError::new)
        }
    }

    fn current() -> Props {
        json!({ "heading": "Old", "body": "Same" }).as_object().cloned().unwrap()
    }

    #[test]
    fn test_request_defaults_and_wire_shape() {
        let request = AiRequest::new("Shorten the text");
        assert_eq!(request.max_tokens, 2000);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "prompt": "Shorten the text", "maxTokens": 2000, "temperature": 0.7f32 })
        );
    }

    #[test]
    fn test_proposal_lists_changed_keys() {
        let proposal = AiProposal::from_completion(
            "s_1",
            &current(),
            "```json\n{\"heading\": \"New\", \"body\": \"Same\"}\n```",
        )
        .unwrap();

        assert!(proposal.has_changes());
        assert_eq!(proposal.changed_keys, vec!["heading"]);

        match proposal.accept_all() {
            Action::ApplyAiPatch { target_id, accepted_keys, .. } => {
                assert_eq!(target_id, "s_1");
                assert_eq!(accepted_keys, vec!["heading"]);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_assist_success() {
        let transport = Canned(Ok("{\"heading\": \"Faster\"}"));
        let proposal = assist(&transport, "s_1", &current(), AiRequest::new("x"))
            .await
            .unwrap();
        assert_eq!(proposal.proposed["heading"], "Faster");
    }

    #[tokio::test]
    async fn test_assist_distinguishes_failures() {
        let transport = Canned(Err("timeout"));
        let err = assist(&transport, "s_1", &current(), AiRequest::new("x"))
            .await
            .unwrap_err();
        assert_eq!(err, AiError::Transport(TransportError::new("timeout")));
        assert_eq!(err.guidance(), "Failed to generate content. Please try again.");

        let transport = Canned(Ok("Sorry, I can't help with that."));
        let err = assist(&transport, "s_1", &current(), AiRequest::new("x"))
            .await
            .unwrap_err();
        assert_eq!(err, AiError::MalformedResponse);
        assert!(err.guidance().starts_with("AI returned an invalid response"));
    }
}
