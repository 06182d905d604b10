//! Score display in the top-right corner.

use crate::entities::{Rect, Viewport};
use crate::host::{Image, RenderSurface, TextRasterizer};
use crate::settings::Settings;

/// Round to the nearest ten, ties to the even ten (25 -> 20, 35 -> 40).
/// Scores too close to `u32::MAX` to round up round down instead.
pub fn round_to_ten(score: u32) -> u32 {
    let remainder = score % 10;
    let base = score - remainder;
    match remainder {
        0..=4 => base,
        5 if (base / 10) % 2 == 0 => base,
        _ => base.checked_add(10).unwrap_or(base),
    }
}

/// The score as shown on screen: rounded to ten with `,` thousands separators.
pub fn format_score(score: u32) -> String {
    let digits = round_to_ten(score).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Holds the last rasterised score so it is only re-rendered on change.
pub struct Scoreboard {
    pub score_image: Image,
    pub score_rect: Rect,
    viewport: Viewport,
}

impl Scoreboard {
    pub fn new(
        settings: &Settings,
        viewport: Viewport,
        score: u32,
        text: &impl TextRasterizer,
    ) -> Self {
        let (score_image, score_rect) = Self::layout(settings, viewport, score, text);
        Self {
            score_image,
            score_rect,
            viewport,
        }
    }

    fn layout(
        settings: &Settings,
        viewport: Viewport,
        score: u32,
        text: &impl TextRasterizer,
    ) -> (Image, Rect) {
        let (image, width, height) = text.render(
            &format_score(score),
            false,
            settings.text_color,
            settings.bg_color,
        );
        let rect = Rect::new(
            viewport.width - settings.score_margin_right - width,
            settings.score_margin_top,
            width,
            height,
        );
        (image, rect)
    }

    /// Re-rasterise after the score changed.
    pub fn prep_score(&mut self, settings: &Settings, score: u32, text: &impl TextRasterizer) {
        let (image, rect) = Self::layout(settings, self.viewport, score, text);
        self.score_image = image;
        self.score_rect = rect;
    }

    pub fn show_score(&self, surface: &mut impl RenderSurface) {
        surface.draw_image(&self.score_image, self.score_rect);
    }
}
