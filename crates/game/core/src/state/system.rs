use crate::catalog::{SystemCard, SystemCategory, SystemId};

/// A drawn system, owned by exactly one of the Empire or Explored lists.
///
/// The card data is copied in on draw; the history flags are the only part
/// that changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    pub id: SystemId,
    pub name: String,
    pub category: SystemCategory,
    pub resistance: u32,
    pub metal: u32,
    pub wealth: u32,
    pub victory_points: u32,
    /// Set when the system broke away in a revolt.
    pub revolted: bool,
    /// Set when the system was lost to an invasion.
    pub invaded: bool,
}

impl System {
    pub fn is_home(&self) -> bool {
        self.category == SystemCategory::Home
    }
}

impl From<&SystemCard> for System {
    fn from(card: &SystemCard) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            category: card.category,
            resistance: card.resistance,
            metal: card.metal,
            wealth: card.wealth,
            victory_points: card.victory_points,
            revolted: false,
            invaded: false,
        }
    }
}
