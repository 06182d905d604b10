//! Per-game statistics.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    /// Never decreases within a game.
    pub score: u32,
    /// Starts at `ship_limit`, floors at zero.
    pub ships_left: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        Self {
            score: 0,
            ships_left: settings.ship_limit,
        }
    }

    /// Back to a fresh game, whatever the previous one ended on.
    pub fn reset(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }
}
