//! Bounding box types in the two COCO box layouts.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use crate::error::CocoPlusError;

/// An axis-aligned bounding box in XYXY format (x1, y1, x2, y2).
///
/// Corners are inclusive pixel positions: a box one pixel wide has
/// `x1 == x2`.
///
/// Note: This type does NOT enforce that min <= max in the constructor,
/// allowing "malformed" boxes to exist. Converting from [`BBoxXYWH`] always
/// yields an ordered box, but other sources may not.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYXY {
    pub min: Coord,
    pub max: Coord,
}

impl BBoxXYXY {
    /// Creates a new bounding box from min and max coordinates.
    #[inline]
    pub fn new(min: Coord, max: Coord) -> Self {
        Self { min, max }
    }

    /// Creates a new bounding box from explicit coordinates.
    #[inline]
    pub fn from_xyxy(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min: Coord::new(x1, y1),
            max: Coord::new(x2, y2),
        }
    }

    /// Returns the first x coordinate.
    #[inline]
    pub fn x1(&self) -> f64 {
        self.min.x
    }

    /// Returns the first y coordinate.
    #[inline]
    pub fn y1(&self) -> f64 {
        self.min.y
    }

    /// Returns the second x coordinate.
    #[inline]
    pub fn x2(&self) -> f64 {
        self.max.x
    }

    /// Returns the second y coordinate.
    #[inline]
    pub fn y2(&self) -> f64 {
        self.max.y
    }

    /// Returns true if the box is properly ordered (min <= max for both axes).
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Returns the coordinates as `[x1, y1, x2, y2]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Returns both corners truncated toward zero to integer pixels.
    #[inline]
    pub fn to_pixel_corners(&self) -> ((i32, i32), (i32, i32)) {
        (self.min.to_pixel(), self.max.to_pixel())
    }
}

impl std::fmt::Debug for BBoxXYXY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYXY")
            .field("x1", &self.min.x)
            .field("y1", &self.min.y)
            .field("x2", &self.max.x)
            .field("y2", &self.max.y)
            .finish()
    }
}

impl Default for BBoxXYXY {
    fn default() -> Self {
        Self::from_xyxy(0.0, 0.0, 0.0, 0.0)
    }
}

impl From<[f64; 4]> for BBoxXYXY {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::from_xyxy(x1, y1, x2, y2)
    }
}

impl TryFrom<&[f64]> for BBoxXYXY {
    type Error = CocoPlusError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self::from(four(values)?))
    }
}

impl Serialize for BBoxXYXY {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BBoxXYXY {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f64; 4]>::deserialize(deserializer).map(Self::from)
    }
}

/// A bounding box in XYWH format: top-left corner plus width and height.
///
/// This is the layout used by the `bbox` field of COCO annotations.
/// Sizes are expected to be non-negative but this is not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BBoxXYWH {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBoxXYWH {
    /// Creates a new box from its top-left corner and size.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the values as `[x, y, w, h]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

impl From<[f64; 4]> for BBoxXYWH {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl TryFrom<&[f64]> for BBoxXYWH {
    type Error = CocoPlusError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Ok(Self::from(four(values)?))
    }
}

impl Serialize for BBoxXYWH {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BBoxXYWH {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f64; 4]>::deserialize(deserializer).map(Self::from)
    }
}

fn four(values: &[f64]) -> Result<[f64; 4], CocoPlusError> {
    <[f64; 4]>::try_from(values).map_err(|_| CocoPlusError::BoxLength { len: values.len() })
}
