use alien_invasion::collision::*;
use alien_invasion::entities::{Alien, Bullet, Ship, Viewport};
use alien_invasion::settings::Settings;

fn alien(x: f32, y: f32) -> Alien {
    Alien {
        x,
        y,
        width: 30.0,
        height: 30.0,
    }
}

fn bullet(x: f32, y: f32, width: f32) -> Bullet {
    Bullet {
        x,
        y,
        width,
        height: 20.0,
    }
}

// ── Bullets ↔ aliens ──────────────────────────────────────────────────────────

#[test]
fn miss_keeps_everything() {
    let hits = resolve_bullet_hits(&[bullet(500.0, 500.0, 3.0)], &[alien(30.0, 30.0)]);
    assert_eq!(hits.aliens_destroyed, 0);
    assert_eq!(hits.bullets.len(), 1);
    assert_eq!(hits.aliens.len(), 1);
}

#[test]
fn one_bullet_one_alien() {
    let aliens = vec![alien(30.0, 30.0), alien(200.0, 30.0)];
    let hits = resolve_bullet_hits(&[bullet(40.0, 40.0, 3.0)], &aliens);
    assert_eq!(hits.aliens_destroyed, 1);
    assert!(hits.bullets.is_empty());
    assert_eq!(hits.aliens, vec![alien(200.0, 30.0)]);
}

#[test]
fn one_bullet_spanning_two_aliens_removes_both() {
    // Bullet covers x 55..65; aliens cover 30..60 and 60..90
    let aliens = vec![alien(30.0, 30.0), alien(60.0, 30.0), alien(300.0, 30.0)];
    let hits = resolve_bullet_hits(&[bullet(55.0, 35.0, 10.0)], &aliens);
    assert_eq!(hits.aliens_destroyed, 2);
    assert!(hits.bullets.is_empty());
    assert_eq!(hits.aliens, vec![alien(300.0, 30.0)]);
}

#[test]
fn two_bullets_on_one_alien_count_once() {
    let bullets = vec![bullet(35.0, 40.0, 3.0), bullet(50.0, 40.0, 3.0)];
    let hits = resolve_bullet_hits(&bullets, &[alien(30.0, 30.0)]);
    assert_eq!(hits.aliens_destroyed, 1);
    assert!(hits.bullets.is_empty());
    assert!(hits.aliens.is_empty());
}

#[test]
fn touching_edges_collide() {
    // Bullet's right edge lands exactly on the alien's left edge
    let hits = resolve_bullet_hits(&[bullet(27.0, 40.0, 3.0)], &[alien(30.0, 30.0)]);
    assert_eq!(hits.aliens_destroyed, 1);
}

#[test]
fn survivors_keep_their_order() {
    let aliens = vec![alien(30.0, 30.0), alien(90.0, 30.0), alien(150.0, 30.0)];
    let bullets = vec![bullet(500.0, 500.0, 3.0), bullet(95.0, 40.0, 3.0), bullet(700.0, 500.0, 3.0)];
    let hits = resolve_bullet_hits(&bullets, &aliens);
    assert_eq!(hits.aliens, vec![alien(30.0, 30.0), alien(150.0, 30.0)]);
    assert_eq!(hits.bullets, vec![bullet(500.0, 500.0, 3.0), bullet(700.0, 500.0, 3.0)]);
}

// ── Aliens ↔ ship / bottom ────────────────────────────────────────────────────

fn ship() -> Ship {
    Ship::new(&Settings::default(), Viewport::new(1200.0, 800.0))
}

#[test]
fn alien_touching_ship() {
    let s = ship(); // 570..630 × 760..800
    assert!(fleet_hits_ship(&[alien(600.0, 740.0)], &s));
    assert!(!fleet_hits_ship(&[alien(100.0, 740.0)], &s));
}

#[test]
fn alien_reaching_bottom() {
    let viewport = Viewport::new(1200.0, 800.0);
    assert!(fleet_reached_bottom(&[alien(30.0, 770.0)], viewport));
    assert!(fleet_reached_bottom(&[alien(30.0, 790.0)], viewport));
    assert!(!fleet_reached_bottom(&[alien(30.0, 769.0)], viewport));
}

#[test]
fn danger_is_either_condition() {
    let viewport = Viewport::new(1200.0, 800.0);
    let s = ship();
    assert!(ship_in_danger(&[alien(600.0, 740.0)], &s, viewport));
    assert!(ship_in_danger(&[alien(30.0, 775.0)], &s, viewport));
    assert!(!ship_in_danger(&[alien(30.0, 30.0)], &s, viewport));
    assert!(!ship_in_danger(&[], &s, viewport));
}
