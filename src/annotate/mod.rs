//! Drawing boxes, points and class labels onto RGB buffers.
//!
//! All drawing goes through an [`Annotator`], which knows the channel order
//! of the buffer it draws on and, optionally, the font used for labels.
//! Drawing mutates the buffer in place. Preconditions (matching name count,
//! a configured font) are checked before any pixel is touched, so a failed
//! call leaves the buffer unchanged.

mod color;
mod label;
mod style;

pub use color::{Color, ColorFormat};
pub use label::LabelFont;
pub use style::{BoxStyle, LabelStyle, PointStyle, Stroke};

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::error::CocoPlusError;
use crate::ir::{BBoxXYWH, BBoxXYXY, Coord};

/// Draws annotations onto buffers of one channel order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Annotator<'f> {
    format: ColorFormat,
    label_font: Option<&'f LabelFont>,
}

impl<'f> Annotator<'f> {
    /// Creates an annotator for buffers holding pixels in `format` order.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            format,
            label_font: None,
        }
    }

    /// Sets the font used by [`show_class_name`](Self::show_class_name) and
    /// by box drawing when names are given.
    pub fn with_label_font(mut self, font: &'f LabelFont) -> Self {
        self.label_font = Some(font);
        self
    }

    pub fn color_format(&self) -> ColorFormat {
        self.format
    }

    /// Draws XYWH boxes, outlining `(x, y)` to `(x + w, y + h)`.
    ///
    /// When `names` is given it must hold one name per box; each name is
    /// drawn above the box's top-left corner.
    pub fn draw_xywh_bbox(
        &self,
        img: &mut RgbImage,
        boxes: &[BBoxXYWH],
        style: &BoxStyle,
        names: Option<&[String]>,
    ) -> Result<(), CocoPlusError> {
        let corners = boxes.iter().map(|bbox| {
            let top_left = Coord::new(bbox.x, bbox.y).to_pixel();
            let far = Coord::new(bbox.x + bbox.width, bbox.y + bbox.height).to_pixel();
            (top_left, far)
        });
        self.draw_corners(img, boxes.len(), corners, style, names)
    }

    /// Draws XYXY boxes, outlining `(x1, y1)` to `(x2, y2)`.
    ///
    /// Same name handling as [`draw_xywh_bbox`](Self::draw_xywh_bbox).
    pub fn draw_xyxy_bbox(
        &self,
        img: &mut RgbImage,
        boxes: &[BBoxXYXY],
        style: &BoxStyle,
        names: Option<&[String]>,
    ) -> Result<(), CocoPlusError> {
        let corners = boxes.iter().map(BBoxXYXY::to_pixel_corners);
        self.draw_corners(img, boxes.len(), corners, style, names)
    }

    /// Draws a circle marker at each point.
    pub fn draw_points(&self, img: &mut RgbImage, points: &[Coord], style: &PointStyle) {
        let pixel = self.format.pixel(style.color);
        let radius = i32::try_from(style.radius).unwrap_or(i32::MAX);
        for point in points {
            let center = point.to_pixel();
            match style.stroke {
                Stroke::Filled => draw_filled_circle_mut(img, center, radius, pixel),
                Stroke::Outline(thickness) => {
                    let thickness = thickness.min(img.width().max(img.height()));
                    for offset in centered_offsets(thickness) {
                        let ring = radius.saturating_add(offset);
                        if ring >= 0 {
                            draw_hollow_circle_mut(img, center, ring, pixel);
                        }
                    }
                }
            }
        }
        log::debug!("drew {} point(s)", points.len());
    }

    /// Draws `text` on a filled background just above `position`.
    ///
    /// `font_scale` is the glyph height in pixels; `None` uses the label
    /// font's [`LabelStyle::scale`].
    pub fn show_class_name(
        &self,
        img: &mut RgbImage,
        position: Coord,
        text: &str,
        font_scale: Option<f32>,
    ) -> Result<(), CocoPlusError> {
        let font = self.label_font.ok_or(CocoPlusError::MissingLabelFont)?;
        let scale = font_scale.unwrap_or(font.style().scale);
        font.draw(img, position.to_pixel(), text, scale, self.format);
        Ok(())
    }

    fn draw_corners(
        &self,
        img: &mut RgbImage,
        count: usize,
        corners: impl Iterator<Item = ((i32, i32), (i32, i32))>,
        style: &BoxStyle,
        names: Option<&[String]>,
    ) -> Result<(), CocoPlusError> {
        let labels = match names {
            Some(names) => {
                if names.len() != count {
                    return Err(CocoPlusError::NameCountMismatch {
                        boxes: count,
                        names: names.len(),
                    });
                }
                let font = self.label_font.ok_or(CocoPlusError::MissingLabelFont)?;
                Some((names, font))
            }
            None => None,
        };

        let pixel = self.format.pixel(style.color);
        for (idx, (near, far)) in corners.enumerate() {
            stroke_rect(img, near, far, style.line_width, pixel);
            if let Some((names, font)) = labels {
                font.draw(img, near, &names[idx], font.style().scale, self.format);
            }
        }
        log::debug!("drew {} box(es) on a {}x{} image", count, img.width(), img.height());
        Ok(())
    }
}

/// Offsets of the one-pixel passes making up a line `width` pixels thick.
///
/// A width of 3 gives `-1..=1`; even widths lean outward. Zero is treated
/// as one.
fn centered_offsets(width: u32) -> std::ops::RangeInclusive<i32> {
    let width = i32::try_from(width.max(1)).unwrap_or(i32::MAX);
    -(width - 1) / 2..=width / 2
}

/// Outlines the inclusive rectangle between two corners.
///
/// Lines wider than the image are drawn as wide as the image.
fn stroke_rect(img: &mut RgbImage, a: (i32, i32), b: (i32, i32), line_width: u32, pixel: Rgb<u8>) {
    let line_width = line_width.min(img.width().max(img.height()));
    // Far-away edges are pulled in to just outside the image; what is
    // visible stays the same.
    let margin = i32::try_from(line_width).unwrap_or(i32::MAX / 4).saturating_add(1);
    let max_x = i32::try_from(img.width()).unwrap_or(i32::MAX).saturating_sub(1).saturating_add(margin);
    let max_y = i32::try_from(img.height()).unwrap_or(i32::MAX).saturating_sub(1).saturating_add(margin);
    let left = a.0.min(b.0).clamp(-margin, max_x);
    let right = a.0.max(b.0).clamp(-margin, max_x);
    let top = a.1.min(b.1).clamp(-margin, max_y);
    let bottom = a.1.max(b.1).clamp(-margin, max_y);

    for offset in centered_offsets(line_width) {
        let (x0, y0) = (left - offset, top - offset);
        let (x1, y1) = (right + offset, bottom + offset);
        if x1 < x0 || y1 < y0 {
            continue;
        }
        let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw_hollow_rect_mut(img, rect, pixel);
    }
}
