use std::fmt;

/// Stable identifier of a star system card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SystemId(pub u8);

impl SystemId {
    /// Parses a choice key such as `"7"` into a system id.
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok().map(Self)
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a system card starts the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemCategory {
    #[strum(serialize = "Starting System")]
    Home,
    #[strum(serialize = "Near System")]
    Near,
    #[strum(serialize = "Distant System")]
    Distant,
}

/// Immutable reference data for one star system.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCard {
    pub id: SystemId,
    pub name: String,
    pub category: SystemCategory,
    pub resistance: u32,
    pub metal: u32,
    pub wealth: u32,
    pub victory_points: u32,
}

impl SystemCard {
    pub fn new(
        id: u8,
        name: impl Into<String>,
        category: SystemCategory,
        resistance: u32,
        metal: u32,
        wealth: u32,
        victory_points: u32,
    ) -> Self {
        Self {
            id: SystemId(id),
            name: name.into(),
            category,
            resistance,
            metal,
            wealth,
            victory_points,
        }
    }
}
