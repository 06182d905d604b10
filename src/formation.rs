//! Fleet generation and fleet-wide movement.
//!
//! The fleet is a grid laid out with one alien-width of space between
//! columns and one alien-height between rows, offset one alien size from the
//! top-left corner. Every alien shares the speed and direction held in
//! [`Difficulty`].

use crate::entities::{Alien, Viewport};
use crate::settings::{Difficulty, FleetDirection};

/// Columns and rows that fit the viewport.
///
/// Each alien takes twice its own size once spacing is included; one alien
/// width is kept clear on each side, and three alien heights plus the ship's
/// height are kept clear vertically. A viewport too small for a single alien
/// gives zero columns or rows rather than a negative count.
pub fn fleet_dimensions(
    viewport: Viewport,
    alien_width: f32,
    alien_height: f32,
    ship_height: f32,
) -> (usize, usize) {
    let available_x = viewport.width - 2.0 * alien_width;
    let available_y = viewport.height - 3.0 * alien_height - ship_height;
    let columns = (available_x / (2.0 * alien_width)).floor().max(0.0);
    let rows = (available_y / (2.0 * alien_height)).floor().max(0.0);
    (columns as usize, rows as usize)
}

/// Build a full fleet, row by row from the top.
pub fn create_fleet(
    viewport: Viewport,
    alien_width: f32,
    alien_height: f32,
    ship_height: f32,
) -> Vec<Alien> {
    let (columns, rows) = fleet_dimensions(viewport, alien_width, alien_height, ship_height);
    if columns == 0 || rows == 0 {
        log::warn!(
            "viewport {}x{} too small for a fleet of {}x{} aliens",
            viewport.width,
            viewport.height,
            alien_width,
            alien_height
        );
        return Vec::new();
    }
    log::debug!("creating fleet of {} rows x {} columns", rows, columns);

    (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |column| Alien {
                x: alien_width + 2.0 * alien_width * column as f32,
                y: alien_height + 2.0 * alien_height * row as f32,
                width: alien_width,
                height: alien_height,
            })
        })
        .collect()
}

/// Whether any alien touches a horizontal edge.
///
/// The whole fleet flips at most once per frame, so which alien is found
/// first has no effect on the outcome.
pub fn fleet_at_edge(aliens: &[Alien], viewport: Viewport) -> bool {
    aliens.iter().any(|a| a.at_edge(viewport))
}

/// One frame of fleet movement.
///
/// If the fleet is at an edge it first drops by `drop_speed` and reverses;
/// then every alien moves horizontally by the current speed in the (possibly
/// new) direction. Returns the moved aliens and the direction to keep.
pub fn update_fleet(
    aliens: &[Alien],
    difficulty: &Difficulty,
    drop_speed: f32,
    viewport: Viewport,
) -> (Vec<Alien>, FleetDirection) {
    let (drop, direction) = if fleet_at_edge(aliens, viewport) {
        (drop_speed, difficulty.fleet_direction.flipped())
    } else {
        (0.0, difficulty.fleet_direction)
    };
    let dx = difficulty.alien_speed * direction.sign();

    let moved = aliens
        .iter()
        .map(|a| Alien {
            x: a.x + dx,
            y: a.y + drop,
            ..a.clone()
        })
        .collect();
    (moved, direction)
}
