use proptest::prelude::*;

use alien_invasion::collision::resolve_bullet_hits;
use alien_invasion::entities::{Alien, Bullet, Viewport};
use alien_invasion::formation::{create_fleet, fleet_dimensions};
use alien_invasion::scoreboard::{format_score, round_to_ten};
use alien_invasion::settings::{Difficulty, FleetDirection};

fn aliens_at(points: Vec<(f32, f32)>) -> Vec<Alien> {
    points
        .into_iter()
        .map(|(x, y)| Alien {
            x,
            y,
            width: 30.0,
            height: 30.0,
        })
        .collect()
}

fn bullets_at(points: Vec<(f32, f32)>) -> Vec<Bullet> {
    points
        .into_iter()
        .map(|(x, y)| Bullet {
            x,
            y,
            width: 3.0,
            height: 15.0,
        })
        .collect()
}

proptest! {
    #[test]
    fn fleet_fits_inside_viewport(
        vw in 10.0f32..2000.0,
        vh in 10.0f32..2000.0,
        aw in 4.0f32..120.0,
        ah in 4.0f32..120.0,
        sh in 4.0f32..120.0,
    ) {
        let viewport = Viewport::new(vw, vh);
        let (columns, rows) = fleet_dimensions(viewport, aw, ah, sh);
        let fleet = create_fleet(viewport, aw, ah, sh);

        prop_assert_eq!(fleet.len(), columns * rows);
        for alien in &fleet {
            let r = alien.rect();
            prop_assert!(r.left() > 0.0);
            prop_assert!(r.right() < vw);
            prop_assert!(r.top() > 0.0);
            prop_assert!(r.bottom() <= vh - sh);
        }
    }

    #[test]
    fn displayed_score_is_rounded_score(score in 0u32..4_000_000_000) {
        let shown = format_score(score);
        let digits: String = shown.chars().filter(|c| *c != ',').collect();
        let value: u64 = digits.parse().unwrap();

        prop_assert_eq!(value, round_to_ten(score) as u64);
        prop_assert_eq!(value % 10, 0);
        prop_assert!((value as i64 - score as i64).abs() <= 5);
        // Groups after the first are exactly three digits
        for group in shown.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn bullet_hits_conserve_entities(
        bullets in prop::collection::vec((0.0f32..400.0, 0.0f32..400.0), 0..12),
        aliens in prop::collection::vec((0.0f32..400.0, 0.0f32..400.0), 0..24),
    ) {
        let bullets = bullets_at(bullets);
        let aliens = aliens_at(aliens);
        let hits = resolve_bullet_hits(&bullets, &aliens);

        prop_assert_eq!(hits.aliens.len() + hits.aliens_destroyed, aliens.len());
        prop_assert!(hits.bullets.len() <= bullets.len());
        prop_assert_eq!(hits.aliens_destroyed == 0, hits.bullets.len() == bullets.len());
        for b in &hits.bullets {
            for a in &hits.aliens {
                prop_assert!(!b.rect().overlaps(&a.rect()));
            }
        }
    }

    #[test]
    fn speedup_strictly_increases(
        ship in 0.1f32..100.0,
        bullet in 0.1f32..100.0,
        alien in 0.1f32..100.0,
        scale in 1.01f32..3.0,
    ) {
        let d = Difficulty {
            ship_speed: ship,
            bullet_speed: bullet,
            alien_speed: alien,
            fleet_direction: FleetDirection::Left,
        };
        let faster = d.increase_speed(scale);
        prop_assert!(faster.ship_speed > d.ship_speed);
        prop_assert!(faster.bullet_speed > d.bullet_speed);
        prop_assert!(faster.alien_speed > d.alien_speed);
        prop_assert_eq!(faster.fleet_direction, FleetDirection::Left);
    }
}
