//! Static tunables loaded from `alien_invasion.toml`, and the dynamic
//! difficulty subset that resets every game.
//!
//! [`Settings`] is read once at startup and then only borrowed. Every field has
//! a compiled default, so a TOML file may override just the values you care
//! about:
//!
//! ```toml
//! ship_limit = 5
//! bg_color = [0, 0, 0]
//! ```
//!
//! [`Difficulty`] is the owned mutable part: current speeds and the fleet
//! direction. It lives inside the game state, never in a global.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

// ── Colour ────────────────────────────────────────────────────────────────────

/// An RGB colour, written as `[r, g, b]` in TOML.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    Io(std::io::Error),
    /// The file is not valid TOML or a value has the wrong type.
    Parse(toml::de::Error),
    /// A value parsed fine but is outside the range the game can run with.
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "setting '{}' = {} must be {}", name, value, expected),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::OutOfRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        SettingsError::Parse(e)
    }
}

// ── Static settings ───────────────────────────────────────────────────────────

/// Everything the game reads but never changes after startup.
///
/// Sizes and speeds are in viewport pixels (per frame for speeds).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub bg_color: Color,
    pub frame_rate: u32,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,
    pub ship_limit: u32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    // ── Aliens ───────────────────────────────────────────────────────────────
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    pub alien_points: u32,

    /// Multiplier applied to every dynamic speed when a fleet is cleared.
    pub speedup_scale: f32,

    // ── Scoreboard & button ──────────────────────────────────────────────────
    pub text_color: Color,
    pub score_margin_right: f32,
    pub score_margin_top: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub button_color: Color,
    pub button_text_color: Color,

    // ── Ship-hit feedback (in frames) ────────────────────────────────────────
    pub blink_count: u32,
    pub blink_frames: u32,
    pub hit_pause_frames: u32,

    // ── Terminal ─────────────────────────────────────────────────────────────
    /// Viewport pixels covered by one terminal cell.
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bg_color: Color(230, 230, 230),
            frame_rate: 60,

            ship_width: 60.0,
            ship_height: 40.0,
            ship_speed: 4.5,
            ship_limit: 3,

            bullet_speed: 7.0,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: Color(60, 60, 60),
            bullets_allowed: 3,

            alien_width: 40.0,
            alien_height: 40.0,
            alien_speed: 1.5,
            fleet_drop_speed: 10.0,
            alien_points: 50,

            speedup_scale: 1.1,

            text_color: Color(30, 30, 30),
            score_margin_right: 20.0,
            score_margin_top: 10.0,
            button_width: 200.0,
            button_height: 50.0,
            button_color: Color(0, 255, 0),
            button_text_color: Color(255, 255, 255),

            blink_count: 5,
            blink_frames: 12,
            hit_pause_frames: 48,

            cell_width: 10,
            cell_height: 20,
        }
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            name,
            value,
            expected: "greater than zero",
        })
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults; any other read or parse failure is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let settings = Self::from_toml(&text)?;
                log::info!("loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no {} found; using compiled defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        require_positive("frame_rate", self.frame_rate as f64)?;
        require_positive("ship_width", self.ship_width as f64)?;
        require_positive("ship_height", self.ship_height as f64)?;
        require_positive("ship_speed", self.ship_speed as f64)?;
        require_positive("ship_limit", self.ship_limit as f64)?;
        require_positive("bullet_speed", self.bullet_speed as f64)?;
        require_positive("bullet_width", self.bullet_width as f64)?;
        require_positive("bullet_height", self.bullet_height as f64)?;
        require_positive("bullets_allowed", self.bullets_allowed as f64)?;
        require_positive("alien_width", self.alien_width as f64)?;
        require_positive("alien_height", self.alien_height as f64)?;
        require_positive("alien_speed", self.alien_speed as f64)?;
        require_positive("blink_frames", self.blink_frames as f64)?;
        require_positive("cell_width", self.cell_width as f64)?;
        require_positive("cell_height", self.cell_height as f64)?;
        if self.fleet_drop_speed < 0.0 {
            return Err(SettingsError::OutOfRange {
                name: "fleet_drop_speed",
                value: self.fleet_drop_speed as f64,
                expected: "zero or greater",
            });
        }
        if self.speedup_scale <= 1.0 {
            return Err(SettingsError::OutOfRange {
                name: "speedup_scale",
                value: self.speedup_scale as f64,
                expected: "greater than 1.0",
            });
        }
        Ok(())
    }

    /// Frames spent in the ship-hit recovery sub-state.
    pub fn recovery_frames(&self) -> u32 {
        self.blink_count
            .saturating_mul(self.blink_frames)
            .saturating_add(self.hit_pause_frames)
    }
}

// ── Dynamic difficulty ────────────────────────────────────────────────────────

/// Horizontal travel direction shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    /// `+1.0` for right, `-1.0` for left.
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// The part of the configuration that changes during play.
#[derive(Clone, Debug, PartialEq)]
pub struct Difficulty {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_direction: FleetDirection,
}

impl Difficulty {
    /// Base values for a fresh game.
    pub fn initial(settings: &Settings) -> Self {
        Self {
            ship_speed: settings.ship_speed,
            bullet_speed: settings.bullet_speed,
            alien_speed: settings.alien_speed,
            fleet_direction: FleetDirection::Right,
        }
    }

    /// Scale every speed by `scale` after a cleared fleet.
    pub fn increase_speed(&self, scale: f32) -> Self {
        Self {
            ship_speed: self.ship_speed * scale,
            bullet_speed: self.bullet_speed * scale,
            alien_speed: self.alien_speed * scale,
            ..self.clone()
        }
    }
}
