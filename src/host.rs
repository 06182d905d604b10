//! Contracts for the collaborators the game runs on top of.
//!
//! The simulation never touches pixels, keyboards or fonts directly. A host
//! (the terminal front end in the binary, or a fake in tests) implements these
//! traits and the controller in [`crate::game`] drives them once per frame.

use std::io;

use crate::entities::Rect;
use crate::settings::Color;

/// Keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Q,
}

/// One discrete input event, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// A pointer press at viewport pixel coordinates.
    PointerDown { x: f32, y: f32 },
}

/// Rasterised text: the string plus how it should be painted.
#[derive(Clone, Debug, PartialEq)]
pub struct TextImage {
    pub text: String,
    pub bold: bool,
    pub fg: Color,
    pub bg: Color,
}

/// Anything that can be drawn into a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub enum Image {
    Ship,
    Alien,
    /// A solid rectangle.
    Fill(Color),
    Text(TextImage),
}

pub trait RenderSurface {
    /// Pixel size of the drawable area.
    fn dimensions(&self) -> (u32, u32);
    fn clear(&mut self, color: Color);
    fn draw_image(&mut self, image: &Image, rect: Rect);
    /// Make everything drawn since the last `clear` visible.
    fn present(&mut self) -> io::Result<()>;
}

pub trait InputSource {
    /// Drain every event that arrived since the previous call.
    fn poll(&mut self) -> Vec<InputEvent>;
}

pub trait TextRasterizer {
    /// Returns the image with its natural width and height in pixels.
    fn render(&self, text: &str, bold: bool, fg: Color, bg: Color) -> (Image, f32, f32);
}

pub trait CursorControl {
    fn set_visible(&mut self, visible: bool);
}
