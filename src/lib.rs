//! Alien Invasion - a fixed-viewport arcade shooter.
//!
//! The library holds the whole simulation and talks to the outside world only
//! through the traits in [`host`]. The terminal front end lives in the binary.

pub mod button;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod formation;
pub mod game;
pub mod host;
pub mod scoreboard;
pub mod settings;
pub mod stats;
