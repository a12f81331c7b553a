//! Drawing colors and buffer channel order.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::CocoPlusError;

/// A drawing color, stored in blue-green-red order.
///
/// Colors are always written BGR so that a given `Color` means the same
/// thing whatever the channel order of the target buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const GREEN: Color = Color::bgr(0, 255, 0);

    /// Creates a color from blue, green and red components.
    #[inline]
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self([b, g, r])
    }

    /// Creates a color from red, green and blue components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([b, g, r])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GREEN
    }
}

/// Channel order of the pixels held in an image buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    #[serde(rename = "RGB")]
    Rgb,
    #[default]
    #[serde(rename = "BGR")]
    Bgr,
}

impl ColorFormat {
    /// Maps `color` to the pixel value to store in a buffer of this order.
    ///
    /// Writing this pixel gives the same result as converting the buffer to
    /// BGR, drawing `color`, and converting back.
    #[inline]
    pub fn pixel(self, color: Color) -> Rgb<u8> {
        let [b, g, r] = color.0;
        match self {
            ColorFormat::Rgb => Rgb([r, g, b]),
            ColorFormat::Bgr => Rgb([b, g, r]),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = CocoPlusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("RGB") {
            Ok(ColorFormat::Rgb)
        } else if s.eq_ignore_ascii_case("BGR") {
            Ok(ColorFormat::Bgr)
        } else {
            Err(CocoPlusError::UnsupportedColorFormat(s.to_string()))
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Rgb => write!(f, "RGB"),
            ColorFormat::Bgr => write!(f, "BGR"),
        }
    }
}
