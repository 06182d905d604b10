//! The frame-driven controller.
//!
//! [`AlienInvasion`] owns the settings, the game state and the prepared
//! scoreboard/button images. Each call to [`AlienInvasion::run_frame`]
//! drains input, advances the simulation once and redraws everything.
//! Collaborator side effects (cursor visibility, text rasterisation) happen
//! here, keyed off the state transitions that [`crate::compute`] returns.

use std::io;

use crate::button::Button;
use crate::compute::{fire_bullet, init_state, start_new_game, tick};
use crate::entities::{GameState, GameStatus, Viewport};
use crate::host::{CursorControl, Image, InputEvent, InputSource, Key, RenderSurface, TextRasterizer};
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;

/// Whether the frame loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct AlienInvasion {
    settings: Settings,
    state: GameState,
    scoreboard: Scoreboard,
    play_button: Button,
}

impl AlienInvasion {
    /// Size the viewport from the surface and prepare the start screen.
    pub fn new<H: RenderSurface + TextRasterizer>(settings: Settings, host: &H) -> Self {
        let (width, height) = host.dimensions();
        let viewport = Viewport::new(width as f32, height as f32);
        let state = init_state(&settings, viewport);
        let scoreboard = Scoreboard::new(&settings, viewport, state.stats.score, host);
        let play_button = Button::new(&settings, viewport, "Play", host);
        log::info!(
            "viewport {}x{}, fleet of {} aliens",
            width,
            height,
            state.aliens.len()
        );
        Self {
            settings,
            state,
            scoreboard,
            play_button,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn play_button(&self) -> &Button {
        &self.play_button
    }

    /// One full frame: input, simulation, drawing.
    pub fn run_frame<H>(&mut self, host: &mut H) -> io::Result<Control>
    where
        H: RenderSurface + InputSource + TextRasterizer + CursorControl,
    {
        for event in host.poll() {
            if self.handle_event(event, host) == Control::Quit {
                log::info!("quit requested");
                return Ok(Control::Quit);
            }
        }
        self.update(host);
        self.draw(host)?;
        Ok(Control::Continue)
    }

    /// Apply one input event.
    pub fn handle_event<H: TextRasterizer + CursorControl>(
        &mut self,
        event: InputEvent,
        host: &mut H,
    ) -> Control {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Q) => return Control::Quit,
            InputEvent::KeyDown(Key::Right) => self.state.ship.moving_right = true,
            InputEvent::KeyDown(Key::Left) => self.state.ship.moving_left = true,
            InputEvent::KeyDown(Key::Space) => {
                if self.state.status.is_active() {
                    self.state = fire_bullet(&self.state, &self.settings);
                } else {
                    self.start_game(host);
                }
            }
            InputEvent::KeyUp(Key::Right) => self.state.ship.moving_right = false,
            InputEvent::KeyUp(Key::Left) => self.state.ship.moving_left = false,
            InputEvent::KeyUp(_) => {}
            InputEvent::PointerDown { x, y } => {
                if !self.state.status.is_active() && self.play_button.contains(x, y) {
                    self.start_game(host);
                }
            }
        }
        Control::Continue
    }

    fn start_game<H: TextRasterizer + CursorControl>(&mut self, host: &mut H) {
        self.state = start_new_game(&self.state, &self.settings);
        self.scoreboard
            .prep_score(&self.settings, self.state.stats.score, &*host);
        host.set_visible(false);
        log::info!("new game started with {} ships", self.state.stats.ships_left);
    }

    /// Advance the simulation one frame and react to what changed.
    pub fn update<H: TextRasterizer + CursorControl>(&mut self, host: &mut H) {
        let next = tick(&self.state, &self.settings);
        if next.stats.score != self.state.stats.score {
            self.scoreboard
                .prep_score(&self.settings, next.stats.score, &*host);
        }
        if next.status == GameStatus::GameOver && self.state.status != GameStatus::GameOver {
            host.set_visible(true);
        }
        self.state = next;
    }

    /// Redraw the whole frame and present it.
    pub fn draw<S: RenderSurface>(&self, surface: &mut S) -> io::Result<()> {
        surface.clear(self.settings.bg_color);

        if self.state.ship.visible {
            surface.draw_image(&Image::Ship, self.state.ship.rect().rounded());
        }
        let bullet_image = Image::Fill(self.settings.bullet_color);
        for bullet in &self.state.bullets {
            surface.draw_image(&bullet_image, bullet.rect().rounded());
        }
        for alien in &self.state.aliens {
            surface.draw_image(&Image::Alien, alien.rect().rounded());
        }

        self.scoreboard.show_score(surface);

        if !self.state.status.is_active() {
            self.play_button.draw(surface);
        }

        surface.present()
    }
}
