//! # Edit Session Management
//!
//! An EditSession is one operator's editing state for a page: the
//! composition store plus any AI requests still in flight.
//!
//! AI requests are tracked by ticket. A ticket names the section instance
//! it was issued for, so a response that arrives after that section was
//! removed, or after the panel was closed, is dropped instead of merged.

use crate::ai::{AiProposal, AiRequest, AiResponse, CompletionTransport};
use crate::errors::{AiError, TransportError};
use crate::store::{Action, CompositionStore, Dispatch, EditorState};
use std::time::{SystemTime, UNIX_EPOCH};

/// AI request waiting for its response
#[derive(Debug, Clone, PartialEq)]
pub struct AiTicket {
    /// Unique ticket ID
    pub id: String,

    /// Instance id of the section being rewritten
    pub target_id: String,

    /// When it was issued (seconds since the epoch)
    pub timestamp: u64,
}

/// Single operator's edit session
#[derive(Debug)]
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    store: CompositionStore,

    pending_ai: Vec<AiTicket>,

    issued: u64,
}

impl EditSession {
    pub fn new(id: impl Into<String>, store: CompositionStore) -> Self {
        Self {
            id: id.into(),
            store,
            pending_ai: Vec::new(),
            issued: 0,
        }
    }

    pub fn state(&self) -> &EditorState {
        self.store.state()
    }

    pub fn store(&self) -> &CompositionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CompositionStore {
        &mut self.store
    }

    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        self.store.dispatch(action)
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    /// Issue a ticket for rewriting the selected section
    ///
    /// Only one request per section may be outstanding.
    pub fn begin_ai_request(&mut self) -> Result<AiTicket, AiError> {
        let target_id = self
            .store
            .state()
            .selected_section()
            .map(|s| s.id.clone())
            .ok_or(AiError::NoSelection)?;

        if self.pending_ai.iter().any(|t| t.target_id == target_id) {
            return Err(AiError::AlreadyPending(target_id));
        }

        self.issued += 1;
        let ticket = AiTicket {
            id: format!("{}-ai-{}", self.id, self.issued),
            target_id,
            timestamp: current_timestamp(),
        };
        self.pending_ai.push(ticket.clone());

        Ok(ticket)
    }

    /// Turn a transport result into a proposal for review
    ///
    /// The ticket is consumed either way. Unknown tickets and tickets whose
    /// section has been removed come back as [`AiError::Discarded`].
    pub fn resolve_ai_request(
        &mut self,
        ticket_id: &str,
        result: Result<AiResponse, TransportError>,
    ) -> Result<AiProposal, AiError> {
        let ticket = self
            .take_ticket(ticket_id)
            .ok_or_else(|| AiError::Discarded(ticket_id.to_string()))?;

        let Some(section) = self.store.state().get(&ticket.target_id) else {
            tracing::warn!(ticket = %ticket.id, target_id = %ticket.target_id, "AI response dropped: section removed");
            return Err(AiError::Discarded(ticket.id));
        };

        let response = result?;
        AiProposal::from_completion(ticket.target_id, &section.props, &response.content)
    }

    /// Merge the accepted keys of a reviewed proposal
    pub fn apply_ai_proposal<I, S>(&mut self, proposal: &AiProposal, accepted_keys: I) -> Dispatch
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.dispatch(proposal.accept(accepted_keys))
    }

    /// Close the AI panel without waiting for the response
    pub fn discard_ai_request(&mut self, ticket_id: &str) -> bool {
        self.take_ticket(ticket_id).is_some()
    }

    pub fn pending_ai_count(&self) -> usize {
        self.pending_ai.len()
    }

    /// Issue, send, and resolve one AI request for the selected section
    pub async fn request_rewrite<T>(
        &mut self,
        transport: &T,
        request: AiRequest,
    ) -> Result<AiProposal, AiError>
    where
        T: CompletionTransport,
    {
        let ticket = self.begin_ai_request()?;
        let result = transport.complete(request).await;
        self.resolve_ai_request(&ticket.id, result)
    }

    fn take_ticket(&mut self, ticket_id: &str) -> Option<AiTicket> {
        let index = self.pending_ai.iter().position(|t| t.id == ticket_id)?;
        Some(self.pending_ai.remove(index))
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
