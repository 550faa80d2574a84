/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Storage ceiling for metal and wealth without Interstellar Banking.
    pub base_storage_cap: u32,
    /// Storage ceiling once Interstellar Banking is owned.
    pub banking_storage_cap: u32,
    /// Military strength ceiling without Capital Ships.
    pub base_military_cap: u32,
    /// Military strength ceiling once Capital Ships is owned.
    pub capital_ships_military_cap: u32,
    /// Faces on the combat die.
    pub die_sides: u32,
    /// Year whose event deck exhaustion ends the game in victory.
    pub final_year: u32,
    /// Event cards discarded unseen when the game is set up.
    pub opening_event_discards: usize,
    /// Event cards discarded unseen each time a new year's deck is built.
    pub new_year_event_discards: usize,
}

impl GameConfig {
    pub const DEFAULT_STORAGE_CAP: u32 = 3;
    pub const BANKING_STORAGE_CAP: u32 = 5;
    pub const DEFAULT_MILITARY_CAP: u32 = 3;
    pub const CAPITAL_SHIPS_MILITARY_CAP: u32 = 5;
    pub const DIE_SIDES: u32 = 6;
    pub const FINAL_YEAR: u32 = 2;

    pub fn new() -> Self {
        Self {
            base_storage_cap: Self::DEFAULT_STORAGE_CAP,
            banking_storage_cap: Self::BANKING_STORAGE_CAP,
            base_military_cap: Self::DEFAULT_MILITARY_CAP,
            capital_ships_military_cap: Self::CAPITAL_SHIPS_MILITARY_CAP,
            die_sides: Self::DIE_SIDES,
            final_year: Self::FINAL_YEAR,
            opening_event_discards: 1,
            new_year_event_discards: 2,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
