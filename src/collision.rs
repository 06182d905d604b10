//! Collision detection between bullets, aliens and the ship.
//!
//! Removal is mark-and-compact: every overlapping pair is found against the
//! unmodified inputs first, then the survivors are collected in one pass.

use crate::entities::{Alien, Bullet, Ship, Viewport};

/// Outcome of one bullet-versus-fleet pass.
#[derive(Clone, Debug)]
pub struct BulletHits {
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    /// Distinct aliens removed in this pass.
    pub aliens_destroyed: usize,
}

/// Remove every bullet and every alien that takes part in at least one
/// overlapping pair.
///
/// All pairs are considered, so a bullet spanning two aliens removes both of
/// them; each entity is still removed (and each alien counted) only once.
pub fn resolve_bullet_hits(bullets: &[Bullet], aliens: &[Alien]) -> BulletHits {
    let mut used_bullets = vec![false; bullets.len()];
    let mut killed_aliens = vec![false; aliens.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        for (ai, alien) in aliens.iter().enumerate() {
            if bullet_rect.overlaps(&alien.rect()) {
                used_bullets[bi] = true;
                killed_aliens[ai] = true;
            }
        }
    }

    let aliens_destroyed = killed_aliens.iter().filter(|&&k| k).count();

    let bullets = bullets
        .iter()
        .zip(&used_bullets)
        .filter(|(_, &used)| !used)
        .map(|(b, _)| b.clone())
        .collect();

    let aliens = aliens
        .iter()
        .zip(&killed_aliens)
        .filter(|(_, &killed)| !killed)
        .map(|(a, _)| a.clone())
        .collect();

    BulletHits {
        bullets,
        aliens,
        aliens_destroyed,
    }
}

/// Whether any alien touches the ship.
pub fn fleet_hits_ship(aliens: &[Alien], ship: &Ship) -> bool {
    let ship_rect = ship.rect();
    aliens.iter().any(|a| a.rect().overlaps(&ship_rect))
}

/// Whether any alien's bottom edge has reached the bottom of the viewport.
pub fn fleet_reached_bottom(aliens: &[Alien], viewport: Viewport) -> bool {
    aliens.iter().any(|a| a.rect().bottom() >= viewport.height)
}

/// The per-frame life-loss check: contact with the ship, or an alien landing.
pub fn ship_in_danger(aliens: &[Alien], ship: &Ship, viewport: Viewport) -> bool {
    fleet_hits_ship(aliens, ship) || fleet_reached_bottom(aliens, viewport)
}
