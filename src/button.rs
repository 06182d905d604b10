//! The "Play" button shown while no game is running.

use crate::entities::{Rect, Viewport};
use crate::host::{Image, RenderSurface, TextRasterizer};
use crate::settings::{Color, Settings};

pub struct Button {
    pub rect: Rect,
    color: Color,
    msg_image: Image,
    msg_rect: Rect,
}

impl Button {
    /// A button centred in the viewport with `msg` centred inside it.
    pub fn new(
        settings: &Settings,
        viewport: Viewport,
        msg: &str,
        text: &impl TextRasterizer,
    ) -> Self {
        let rect = Rect::centered_at(
            viewport.width / 2.0,
            viewport.height / 2.0,
            settings.button_width,
            settings.button_height,
        );
        let (msg_image, width, height) =
            text.render(msg, true, settings.button_text_color, settings.button_color);
        let msg_rect = Rect::centered_at(rect.center_x(), rect.center_y(), width, height);
        Self {
            rect,
            color: settings.button_color,
            msg_image,
            msg_rect,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains_point(x, y)
    }

    pub fn draw(&self, surface: &mut impl RenderSurface) {
        surface.draw_image(&Image::Fill(self.color), self.rect);
        surface.draw_image(&self.msg_image, self.msg_rect);
    }
}
