//! Decision requests, their options, and narrative status lines.

use crate::state::Phase;

/// Fixed choice keys used by the attack and build menus.
///
/// System choices are keyed by the system id and research choices by the
/// tech key, so neither appears here.
pub mod keys {
    pub const EXPLORE: &str = "Explore";
    pub const BIDE: &str = "Bide";
    pub const DONE: &str = "Done";
    pub const MILITARY: &str = "Military";
    /// Exchange 2 metal for 1 wealth.
    pub const WEALTH: &str = "Wealth";
    /// Exchange 2 wealth for 1 metal.
    pub const METAL: &str = "Metal";
}

/// One selectable option of a [`Prompt`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub key: String,
    pub label: String,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Case-insensitive key comparison. Surrounding whitespace is not
    /// ignored.
    pub fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

/// A decision request issued by the turn engine.
///
/// Keys are unique within a prompt under case-insensitive comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prompt {
    /// Phase the prompt was issued from.
    pub phase: Phase,
    pub message: String,
    pub choices: Vec<Choice>,
}

impl Prompt {
    pub fn new(phase: Phase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
            choices: Vec::new(),
        }
    }

    pub fn push(&mut self, choice: Choice) {
        debug_assert!(
            self.find(&choice.key).is_none(),
            "duplicate choice key {}",
            choice.key
        );
        self.choices.push(choice);
    }

    pub fn with(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.push(Choice::new(key, label));
        self
    }

    /// Looks up a choice by key, ignoring ASCII case.
    pub fn find(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.matches(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.key.as_str())
    }
}

/// A narrative, non-interactive message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    pub message: String,
}

impl Status {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
