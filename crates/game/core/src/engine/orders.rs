//! Typed readings of choice keys.

use crate::catalog::{SystemId, TechId};
use crate::prompt::keys;

/// What the player chose at the start of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOrder {
    Explore,
    Conquer(SystemId),
    Bide,
}

impl AttackOrder {
    pub fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case(keys::EXPLORE) {
            Some(Self::Explore)
        } else if key.eq_ignore_ascii_case(keys::BIDE) {
            Some(Self::Bide)
        } else {
            SystemId::from_key(key).map(Self::Conquer)
        }
    }
}

/// One build step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildOrder {
    Done,
    Military,
    /// 2 metal for 1 wealth.
    WealthFromMetal,
    /// 2 wealth for 1 metal.
    MetalFromWealth,
    Research(TechId),
}

impl BuildOrder {
    pub fn from_key(key: &str) -> Option<Self> {
        [
            (keys::DONE, Self::Done),
            (keys::MILITARY, Self::Military),
            (keys::WEALTH, Self::WealthFromMetal),
            (keys::METAL, Self::MetalFromWealth),
        ]
        .into_iter()
        .find(|(k, _)| key.eq_ignore_ascii_case(k))
        .map(|(_, order)| order)
        .or_else(|| TechId::from_key(key).map(Self::Research))
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Done => keys::DONE,
            Self::Military => keys::MILITARY,
            Self::WealthFromMetal => keys::WEALTH,
            Self::MetalFromWealth => keys::METAL,
            Self::Research(tech) => tech.key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_keys() {
        assert_eq!(AttackOrder::from_key("explore"), Some(AttackOrder::Explore));
        assert_eq!(AttackOrder::from_key("BIDE"), Some(AttackOrder::Bide));
        assert_eq!(AttackOrder::from_key("7"), Some(AttackOrder::Conquer(SystemId(7))));
        assert_eq!(AttackOrder::from_key("Attack"), None);
        assert_eq!(AttackOrder::from_key(" Bide"), None);
        assert_eq!(AttackOrder::from_key("7 "), None);
    }

    #[test]
    fn build_keys_round_trip() {
        for order in [
            BuildOrder::Done,
            BuildOrder::Military,
            BuildOrder::WealthFromMetal,
            BuildOrder::MetalFromWealth,
            BuildOrder::Research(TechId::PlanetaryDefenses),
        ] {
            assert_eq!(BuildOrder::from_key(order.key()), Some(order));
        }
        assert_eq!(BuildOrder::from_key("metal"), Some(BuildOrder::MetalFromWealth));
        assert_eq!(BuildOrder::from_key("XX"), None);
    }
}
