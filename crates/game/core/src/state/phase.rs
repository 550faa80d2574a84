/// Named stages of a turn.
///
/// The engine matches on every variant, so adding a phase without a handler
/// is a compile error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    StartOfTurn,
    /// Attack or explore.
    #[strum(serialize = "PhaseI")]
    #[cfg_attr(feature = "serde", serde(rename = "PhaseI"))]
    PhaseOne,
    Collect,
    ChooseBuild,
    DoBuild,
    Event,
    Revolt,
    SmallInvasion,
    LargeInvasion,
    EndOfTurn,
    Win,
    Lose,
    End,
}

impl Phase {
    /// True once no further transitions happen.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End)
    }

    /// Phases whose handler consumes a player choice.
    pub const fn awaits_choice(self) -> bool {
        matches!(self, Self::PhaseOne | Self::DoBuild)
    }
}
