//! Class name labels drawn above a position.

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use super::color::ColorFormat;
use super::style::LabelStyle;
use crate::error::CocoPlusError;

/// A loaded font together with the style labels are drawn in.
pub struct LabelFont {
    font: FontVec,
    style: LabelStyle,
}

impl LabelFont {
    /// Parses a TrueType/OpenType font from memory.
    pub fn from_bytes(data: Vec<u8>, style: LabelStyle) -> Result<Self, CocoPlusError> {
        let font = FontVec::try_from_vec(data).map_err(|err| CocoPlusError::FontLoad {
            path: "<memory>".into(),
            message: err.to_string(),
        })?;
        Ok(Self { font, style })
    }

    /// Reads and parses a font file.
    pub fn from_path(path: &Path, style: LabelStyle) -> Result<Self, CocoPlusError> {
        let data = std::fs::read(path).map_err(|err| CocoPlusError::FontLoad {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|err| CocoPlusError::FontLoad {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(Self { font, style })
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Measures `text` at the label scale, as `(width, height)` in pixels.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        text_size(PxScale::from(self.style.scale), &self.font, text)
    }

    /// Draws `text` at `scale` on a filled background whose bottom-left
    /// corner is `origin`. The text baseline sits `floor(0.3 * h)` pixels
    /// above `origin`, where `h` is the measured text height.
    pub(crate) fn draw(
        &self,
        img: &mut RgbImage,
        origin: (i32, i32),
        text: &str,
        scale: f32,
        format: ColorFormat,
    ) {
        let scale = PxScale::from(scale);
        let (text_w, text_h) = text_size(scale, &self.font, text);
        let background = label_background(origin, text_w, text_h);
        draw_filled_rect_mut(img, background, format.pixel(self.style.background));

        // imageproc places the baseline one ascent below the y it is given.
        let ascent = self.font.as_scaled(scale).ascent();
        let (x, y) = label_text_origin(origin, text_h, ascent);
        draw_text_mut(img, format.pixel(self.style.text), x, y, scale, &self.font, text);
    }
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Background rectangle for a `text_w` x `text_h` label anchored at `origin`.
///
/// The box spans `(x, y - floor(1.3 * text_h))` to `(x + text_w, y)`
/// inclusive.
pub(crate) fn label_background(origin: (i32, i32), text_w: u32, text_h: u32) -> Rect {
    let (x, y) = origin;
    let lift = (1.3 * f64::from(text_h)) as i32;
    Rect::at(x, y.saturating_sub(lift)).of_size(text_w + 1, lift as u32 + 1)
}

/// Top-left origin to hand `draw_text_mut` so that the baseline lands on
/// row `y - floor(0.3 * text_h)`, rounding the ascent up.
pub(crate) fn label_text_origin(origin: (i32, i32), text_h: u32, ascent: f32) -> (i32, i32) {
    let (x, y) = origin;
    let baseline = y.saturating_sub((0.3 * f64::from(text_h)) as i32);
    (x, baseline.saturating_sub(ascent.ceil() as i32))
}
