use std::fmt;

/// Stable identifier of an event card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EventId(pub u8);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The event families the engine knows how to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Asteroid,
    #[strum(serialize = "Derelict Ship")]
    DerelictShip,
    #[strum(serialize = "Large Invasion Force")]
    LargeInvasionForce,
    #[strum(serialize = "Peace & Quiet")]
    PeaceAndQuiet,
    Revolt,
    #[strum(serialize = "Small Invasion Force")]
    SmallInvasionForce,
    Strike,
}

/// What an event does in a particular year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventEffect {
    GainWealth(u32),
    GainMetal(u32),
    /// Attacking force bonus for revolts and invasions.
    Force(u32),
    NoEffect,
    NoResources,
}

impl EventEffect {
    /// The force bonus carried by this effect, 0 for non-combat effects.
    pub fn force(self) -> u32 {
        match self {
            Self::Force(n) => n,
            _ => 0,
        }
    }
}

impl fmt::Display for EventEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GainWealth(n) => write!(f, "+{n} Wealth"),
            Self::GainMetal(n) => write!(f, "Gain {n} Metal"),
            Self::Force(n) => write!(f, "Force +{n}"),
            Self::NoEffect => f.write_str("No event"),
            Self::NoResources => f.write_str("No resources next turn"),
        }
    }
}

/// Immutable reference data for one event card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventCard {
    pub id: EventId,
    pub kind: EventKind,
    pub year_one: EventEffect,
    pub year_two: EventEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: Option<String>,
}

impl EventCard {
    pub fn new(id: u8, kind: EventKind, year_one: EventEffect, year_two: EventEffect) -> Self {
        Self {
            id: EventId(id),
            kind,
            year_one,
            year_two,
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn name(&self) -> String {
        self.kind.to_string()
    }

    /// Effect for the given year; any year after the first uses the year-2 side.
    pub fn effect_for(&self, year: u32) -> EventEffect {
        if year <= 1 {
            self.year_one
        } else {
            self.year_two
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_follows_the_year() {
        let card = EventCard::new(5, EventKind::Revolt, EventEffect::Force(1), EventEffect::Force(2));
        assert_eq!(card.effect_for(1).force(), 1);
        assert_eq!(card.effect_for(2).force(), 2);
    }

    #[test]
    fn effects_render_like_the_printed_cards() {
        assert_eq!(EventEffect::GainWealth(1).to_string(), "+1 Wealth");
        assert_eq!(EventEffect::Force(3).to_string(), "Force +3");
        assert_eq!(EventKind::PeaceAndQuiet.to_string(), "Peace & Quiet");
    }
}
