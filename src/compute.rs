//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus the static `Settings`) and returns a brand-new value.
//! Nothing here draws, sleeps or touches a collaborator; the controller in
//! [`crate::game`] turns state changes into side effects.

use crate::collision::{resolve_bullet_hits, ship_in_danger};
use crate::entities::{Alien, Bullet, GameState, GameStatus, Ship, Viewport};
use crate::formation::{create_fleet, update_fleet};
use crate::settings::{Difficulty, Settings};
use crate::stats::GameStats;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The start screen: a full fleet, the ship centred, nothing moving.
pub fn init_state(settings: &Settings, viewport: Viewport) -> GameState {
    GameState {
        viewport,
        ship: Ship::new(settings, viewport),
        bullets: Vec::new(),
        aliens: new_fleet(settings, viewport),
        stats: GameStats::new(settings),
        difficulty: Difficulty::initial(settings),
        status: GameStatus::Menu,
        frame: 0,
    }
}

fn new_fleet(settings: &Settings, viewport: Viewport) -> Vec<Alien> {
    create_fleet(
        viewport,
        settings.alien_width,
        settings.alien_height,
        settings.ship_height,
    )
}

/// Put the ship back mid-bottom, keeping its movement flags.
pub fn center_ship(ship: &Ship, viewport: Viewport) -> Ship {
    Ship {
        x: (viewport.width - ship.width) / 2.0,
        y: viewport.height - ship.height,
        visible: true,
        ..ship.clone()
    }
}

/// Begin a fresh game from the menu or game-over screen.
///
/// Resets speeds, direction and stats, rebuilds the fleet and re-centres the
/// ship. Has no effect while a game is already running.
pub fn start_new_game(state: &GameState, settings: &Settings) -> GameState {
    if state.status.is_active() {
        return state.clone();
    }
    let mut stats = state.stats.clone();
    stats.reset(settings);
    GameState {
        ship: center_ship(&state.ship, state.viewport),
        bullets: Vec::new(),
        aliens: new_fleet(settings, state.viewport),
        stats,
        difficulty: Difficulty::initial(settings),
        status: GameStatus::Playing,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Move the ship by `speed` according to its flags, clamped to the viewport.
pub fn move_ship(ship: &Ship, speed: f32, viewport: Viewport) -> Ship {
    let mut x = ship.x;
    if ship.moving_right {
        x += speed;
    }
    if ship.moving_left {
        x -= speed;
    }
    let max_x = (viewport.width - ship.width).max(0.0);
    Ship {
        x: x.clamp(0.0, max_x),
        ..ship.clone()
    }
}

/// Fire a bullet from the ship unless `bullets_allowed` are already in flight.
/// Only fires while playing.
pub fn fire_bullet(state: &GameState, settings: &Settings) -> GameState {
    if state.status != GameStatus::Playing || state.bullets.len() >= settings.bullets_allowed {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::fired_from(&state.ship, settings));
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Per-frame helpers ────────────────────────────────────────────────────────

/// Move every bullet up and drop the ones whose bottom has left the screen.
pub fn update_bullets(bullets: &[Bullet], speed: f32) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - speed,
            ..b.clone()
        })
        .filter(|b| b.rect().bottom() > 0.0)
        .collect()
}

/// React to the ship being reached by the fleet.
///
/// Costs one ship. If any remain, the board is reset (new fleet, no bullets,
/// ship centred) and the game enters the recovery blink; the last ship lost
/// ends the game instead.
pub fn ship_hit(state: &GameState, settings: &Settings) -> GameState {
    let ships_left = state.stats.ships_left.saturating_sub(1);
    let stats = GameStats {
        ships_left,
        ..state.stats.clone()
    };

    if ships_left == 0 {
        log::info!("game over with score {}", stats.score);
        return GameState {
            stats,
            status: GameStatus::GameOver,
            ..state.clone()
        };
    }

    log::debug!("ship hit, {} left", ships_left);
    let ticks_remaining = settings.recovery_frames();
    let status = if ticks_remaining == 0 {
        GameStatus::Playing
    } else {
        GameStatus::Recovering { ticks_remaining }
    };
    let ship = center_ship(&state.ship, state.viewport);
    GameState {
        ship: Ship {
            visible: ticks_remaining == 0 || blink_visible(settings, 0),
            ..ship
        },
        bullets: Vec::new(),
        aliens: new_fleet(settings, state.viewport),
        stats,
        status,
        ..state.clone()
    }
}

/// Ship visibility `elapsed` ticks into the recovery sub-state.
///
/// The first blink window starts with the ship hidden, as though toggled from
/// visible; afterwards the ship stays visible for the rest of the pause.
fn blink_visible(settings: &Settings, elapsed: u32) -> bool {
    let blink_window = settings.blink_count.saturating_mul(settings.blink_frames);
    if elapsed >= blink_window {
        return true;
    }
    let toggles = elapsed / settings.blink_frames + 1;
    toggles % 2 == 0
}

/// One tick of the post-hit freeze. Nothing else moves.
pub fn advance_recovery(state: &GameState, settings: &Settings) -> GameState {
    let GameStatus::Recovering { ticks_remaining } = state.status else {
        return state.clone();
    };
    let remaining = ticks_remaining.saturating_sub(1);
    if remaining == 0 {
        return GameState {
            ship: Ship {
                visible: true,
                ..state.ship.clone()
            },
            status: GameStatus::Playing,
            ..state.clone()
        };
    }
    let elapsed = settings.recovery_frames().saturating_sub(remaining);
    GameState {
        ship: Ship {
            visible: blink_visible(settings, elapsed),
            ..state.ship.clone()
        },
        status: GameStatus::Recovering {
            ticks_remaining: remaining,
        },
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: ship, bullets, bullet/alien collisions (and fleet regeneration when
/// cleared), fleet movement, then the ship/fleet danger check. Outside of a
/// running game the state is returned unchanged apart from the frame counter.
pub fn tick(state: &GameState, settings: &Settings) -> GameState {
    let frame = state.frame + 1;

    match state.status {
        GameStatus::Playing => {}
        GameStatus::Recovering { .. } => {
            return GameState {
                frame,
                ..advance_recovery(state, settings)
            };
        }
        GameStatus::Menu | GameStatus::GameOver => {
            return GameState {
                frame,
                ..state.clone()
            };
        }
    }

    let viewport = state.viewport;

    // ── 1. Ship ──────────────────────────────────────────────────────────────
    let ship = move_ship(&state.ship, state.difficulty.ship_speed, viewport);

    // ── 2. Bullets ───────────────────────────────────────────────────────────
    let bullets = update_bullets(&state.bullets, state.difficulty.bullet_speed);

    // ── 3. Bullets ↔ aliens ──────────────────────────────────────────────────
    let hits = resolve_bullet_hits(&bullets, &state.aliens);
    let points = settings
        .alien_points
        .saturating_mul(hits.aliens_destroyed as u32);
    let score = state.stats.score.saturating_add(points);
    let (bullets, aliens, difficulty) = if hits.aliens_destroyed > 0 && hits.aliens.is_empty() {
        let difficulty = state.difficulty.increase_speed(settings.speedup_scale);
        log::info!("fleet cleared; alien speed now {:.2}", difficulty.alien_speed);
        (Vec::new(), new_fleet(settings, viewport), difficulty)
    } else {
        (hits.bullets, hits.aliens, state.difficulty.clone())
    };

    // ── 4. Fleet movement ────────────────────────────────────────────────────
    let (aliens, fleet_direction) =
        update_fleet(&aliens, &difficulty, settings.fleet_drop_speed, viewport);

    let next = GameState {
        ship,
        bullets,
        aliens,
        stats: GameStats {
            score,
            ..state.stats.clone()
        },
        difficulty: Difficulty {
            fleet_direction,
            ..difficulty
        },
        frame,
        ..state.clone()
    };

    debug_assert!(next.bullets.len() <= settings.bullets_allowed);
    debug_assert!(next.stats.ships_left <= settings.ship_limit);

    // ── 5. Aliens ↔ ship / bottom edge ───────────────────────────────────────
    if ship_in_danger(&next.aliens, &next.ship, viewport) {
        ship_hit(&next, settings)
    } else {
        next
    }
}
