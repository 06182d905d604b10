//! All game entity types — pure data plus geometry helpers, no game rules.

use crate::settings::{Difficulty, Settings};
use crate::stats::GameStats;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box. Origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width`×`height` box centred on `(cx, cy)`.
    pub fn centered_at(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Non-strict overlap: touching edges count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Half-open containment, the usual rule for pointer hit tests.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    /// Snap the position to whole pixels for drawing.
    pub fn rounded(&self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.width, self.height)
    }
}

/// Size of the play area in pixels. Fixed after startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ── Player & projectiles ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Left edge. Kept as a float so slow speeds still accumulate.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    /// Cleared while blinking after a hit.
    pub visible: bool,
}

impl Ship {
    /// A visible, stationary ship sitting mid-bottom of the viewport.
    pub fn new(settings: &Settings, viewport: Viewport) -> Self {
        Self {
            x: (viewport.width - settings.ship_width) / 2.0,
            y: viewport.height - settings.ship_height,
            width: settings.ship_width,
            height: settings.ship_height,
            moving_left: false,
            moving_right: false,
            visible: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    /// A bullet whose top centre sits on the ship's top centre.
    pub fn fired_from(ship: &Ship, settings: &Settings) -> Self {
        let ship_rect = ship.rect();
        Self {
            x: ship_rect.center_x() - settings.bullet_width / 2.0,
            y: ship_rect.top(),
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the alien touches either horizontal edge of the viewport.
    pub fn at_edge(&self, viewport: Viewport) -> bool {
        let r = self.rect();
        r.right() >= viewport.width || r.left() <= 0.0
    }
}

// ── Session state machine ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    /// Start screen; nothing has been played yet.
    Menu,
    Playing,
    /// Brief freeze after losing a ship while the ship blinks.
    Recovering { ticks_remaining: u32 },
    GameOver,
}

impl GameStatus {
    /// A game is in progress (including the post-hit freeze).
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Recovering { .. })
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulated state. Cloneable so the pure update functions in
/// [`crate::compute`] can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub viewport: Viewport,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub stats: GameStats,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub frame: u64,
}
