//! Cloneable façade over one game session.
//!
//! [`SessionHandle`] hides the bridge plumbing and offers the four external
//! operations of a session: reading statuses, reading prompts, reading board
//! snapshots and submitting choices.
use std::sync::Arc;

use game_core::{BoardSnapshot, Choice, Prompt, Status};

use super::GameId;
use super::errors::Result;
use crate::bridge::Client;

/// Next item of the status stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    Message(Status),
    /// No more statuses will ever arrive.
    End,
}

impl StatusEvent {
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

/// Next item of the prompt stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptEvent {
    Prompt(Prompt),
    /// No more prompts will ever arrive.
    End,
}

impl PromptEvent {
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

/// Client-facing handle to one running game.
///
/// The driving task hands over every status, prompt and board snapshot
/// through rendezvous mailboxes and does not continue until each one is
/// taken. A consumer must therefore keep all three streams drained (usually
/// from separate tasks) or the game stalls on the first unread item.
///
/// Clones share the same receivers: each item is delivered to exactly one
/// caller.
#[derive(Clone)]
pub struct SessionHandle {
    id: GameId,
    client: Arc<Client>,
}

impl SessionHandle {
    pub(crate) fn new(id: GameId, client: Client) -> Self {
        Self {
            id,
            client: Arc::new(client),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Waits for the next narrative message.
    ///
    /// Returns [`StatusEvent::End`] once the game is over or cancelled, and
    /// keeps returning it without blocking.
    pub async fn status(&self) -> StatusEvent {
        match self.client.status().await {
            Some(status) => StatusEvent::Message(status),
            None => StatusEvent::End,
        }
    }

    /// Waits for the next decision request.
    ///
    /// Returns [`PromptEvent::End`] once the game is over or cancelled, and
    /// keeps returning it without blocking.
    pub async fn prompt(&self) -> PromptEvent {
        match self.client.prompt().await {
            Some(prompt) => PromptEvent::Prompt(prompt),
            None => PromptEvent::End,
        }
    }

    /// Waits for the snapshot taken at the end of the next phase.
    ///
    /// After the game is over this returns the final snapshot immediately.
    pub async fn board(&self) -> BoardSnapshot {
        self.client.board().await
    }

    /// Like [`board`](Self::board), but yields `None` instead of repeating
    /// the final snapshot, which suits drain loops.
    pub async fn next_board(&self) -> Option<BoardSnapshot> {
        self.client.next_board().await
    }

    /// Answers the outstanding prompt.
    ///
    /// `key` is matched case-insensitively against the prompt's choices. An
    /// unknown key, or a key for a prompt that was already answered, fails
    /// with [`RuntimeError::InvalidChoice`](super::RuntimeError::InvalidChoice)
    /// and changes nothing. Surrounding whitespace is part of the key.
    pub fn submit_choice(&self, key: &str) -> Result<Choice> {
        self.client.submit(key)
    }

    /// The prompt currently waiting for an answer, if any.
    pub fn outstanding_prompt(&self) -> Option<Prompt> {
        self.client.outstanding()
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle").field("id", &self.id).finish()
    }
}
