//! Asynchronous abstraction for answering prompts.
//!
//! Runtime users plug in [`DecisionProvider`] implementations so a session can
//! be driven by a human front end, scripted fixtures, or a simple bot.
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Prompt, keys};

use super::errors::{Result, RuntimeError};

/// Trait for choosing an answer to a prompt.
///
/// Different implementations can handle:
/// - Player input (from a terminal or another front end)
/// - Automated play
/// - Scripted/replayed decisions
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    /// Returns the key of the choice to submit for `prompt`.
    async fn decide(&self, prompt: &Prompt) -> Result<String>;
}

fn first_key(prompt: &Prompt) -> Result<String> {
    prompt
        .choices
        .first()
        .map(|c| c.key.clone())
        .ok_or_else(|| RuntimeError::InvalidChoice { key: String::new() })
}

/// Never attacks and never builds: picks "Bide" or "Done" whenever offered.
pub struct BideProvider;

#[async_trait]
impl DecisionProvider for BideProvider {
    async fn decide(&self, prompt: &Prompt) -> Result<String> {
        match prompt.find(keys::BIDE).or_else(|| prompt.find(keys::DONE)) {
            Some(choice) => Ok(choice.key.clone()),
            None => first_key(prompt),
        }
    }
}

/// Always takes the first offered choice.
pub struct FirstChoiceProvider;

#[async_trait]
impl DecisionProvider for FirstChoiceProvider {
    async fn decide(&self, prompt: &Prompt) -> Result<String> {
        first_key(prompt)
    }
}

/// Replays a fixed list of keys, then behaves like [`BideProvider`].
///
/// Keys are returned as given; an entry that the prompt does not offer is
/// reported by `submit_choice`, not here.
#[derive(Default)]
pub struct ScriptedProvider {
    keys: Mutex<VecDeque<String>>,
}

impl ScriptedProvider {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: Mutex::new(keys.into_iter().map(Into::into).collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.lock().map(|keys| keys.len()).unwrap_or_default()
    }
}

#[async_trait]
impl DecisionProvider for ScriptedProvider {
    async fn decide(&self, prompt: &Prompt) -> Result<String> {
        let next = match self.keys.lock() {
            Ok(mut keys) => keys.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        match next {
            Some(key) => Ok(key),
            None => BideProvider.decide(prompt).await,
        }
    }
}
