use bitflags::bitflags;

/// One variant per technology; the strum key doubles as the build choice key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TechId {
    #[strum(serialize = "CS")]
    #[cfg_attr(feature = "serde", serde(rename = "CS"))]
    CapitalShips,
    #[strum(serialize = "RW")]
    #[cfg_attr(feature = "serde", serde(rename = "RW"))]
    RobotWorkers,
    #[strum(serialize = "HT")]
    #[cfg_attr(feature = "serde", serde(rename = "HT"))]
    HyperTelevision,
    #[strum(serialize = "IC")]
    #[cfg_attr(feature = "serde", serde(rename = "IC"))]
    InterspeciesCommerce,
    #[strum(serialize = "FS")]
    #[cfg_attr(feature = "serde", serde(rename = "FS"))]
    ForwardStarbases,
    #[strum(serialize = "PD")]
    #[cfg_attr(feature = "serde", serde(rename = "PD"))]
    PlanetaryDefenses,
    #[strum(serialize = "ID")]
    #[cfg_attr(feature = "serde", serde(rename = "ID"))]
    InterstellarDiplomacy,
    #[strum(serialize = "IB")]
    #[cfg_attr(feature = "serde", serde(rename = "IB"))]
    InterstellarBanking,
}

impl TechId {
    /// Short choice key, e.g. `"CS"`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    pub const fn flag(self) -> TechSet {
        match self {
            Self::CapitalShips => TechSet::CAPITAL_SHIPS,
            Self::RobotWorkers => TechSet::ROBOT_WORKERS,
            Self::HyperTelevision => TechSet::HYPER_TELEVISION,
            Self::InterspeciesCommerce => TechSet::INTERSPECIES_COMMERCE,
            Self::ForwardStarbases => TechSet::FORWARD_STARBASES,
            Self::PlanetaryDefenses => TechSet::PLANETARY_DEFENSES,
            Self::InterstellarDiplomacy => TechSet::INTERSTELLAR_DIPLOMACY,
            Self::InterstellarBanking => TechSet::INTERSTELLAR_BANKING,
        }
    }
}

bitflags! {
    /// Set of technologies, used both for ownership and for per-turn usage.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TechSet: u8 {
        const CAPITAL_SHIPS = 1 << 0;
        const ROBOT_WORKERS = 1 << 1;
        const HYPER_TELEVISION = 1 << 2;
        const INTERSPECIES_COMMERCE = 1 << 3;
        const FORWARD_STARBASES = 1 << 4;
        const PLANETARY_DEFENSES = 1 << 5;
        const INTERSTELLAR_DIPLOMACY = 1 << 6;
        const INTERSTELLAR_BANKING = 1 << 7;
    }
}

impl TechSet {
    pub fn has(self, tech: TechId) -> bool {
        self.contains(tech.flag())
    }

    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

/// Immutable reference data for one technology.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tech {
    pub id: TechId,
    pub name: String,
    pub ability: String,
    pub cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prerequisite: Option<TechId>,
    /// Display generation (1 or 2) on the board.
    pub generation: u8,
}

impl Tech {
    pub fn new(
        id: TechId,
        name: impl Into<String>,
        ability: impl Into<String>,
        cost: u32,
        prerequisite: Option<TechId>,
        generation: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            ability: ability.into(),
            cost,
            prerequisite,
            generation,
        }
    }
}
