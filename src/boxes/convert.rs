//! Conversion between the XYWH and XYXY box layouts.
//!
//! A box of width `w` covers the inclusive column range `[x1, x1 + w - 1]`,
//! so XYWH -> XYXY subtracts one from the size (floored at zero) and
//! XYXY -> XYWH adds it back. For `w, h >= 1` the two are exact inverses.

use ndarray::{concatenate, s, Array2, ArrayView2, Axis};

use super::ensure_box_columns;
use crate::error::CocoPlusError;
use crate::ir::{BBoxXYWH, BBoxXYXY};

/// Converts one `[x, y, w, h]` box to `[x1, y1, x2, y2]`.
///
/// Sizes below one collapse onto the top-left corner.
pub fn xywh_to_xyxy(bbox: BBoxXYWH) -> BBoxXYXY {
    BBoxXYXY::from_xyxy(
        bbox.x,
        bbox.y,
        bbox.x + (bbox.width - 1.0).max(0.0),
        bbox.y + (bbox.height - 1.0).max(0.0),
    )
}

/// Converts one `[x1, y1, x2, y2]` box to `[x, y, w, h]`.
///
/// The size is not clamped: a box with `x2 < x1` (or `y2 < y1`) produces
/// a width (or height) of zero or less. Callers that may hold such boxes
/// should check [`BBoxXYXY::is_ordered`] first.
pub fn xyxy_to_xywh(bbox: BBoxXYXY) -> BBoxXYWH {
    BBoxXYWH::new(
        bbox.x1(),
        bbox.y1(),
        bbox.x2() - bbox.x1() + 1.0,
        bbox.y2() - bbox.y1() + 1.0,
    )
}

/// Converts a batch of XYWH rows to XYXY rows.
///
/// Returns a new matrix with the same number of rows.
pub fn xywh_to_xyxy_batch(boxes: ArrayView2<'_, f64>) -> Result<Array2<f64>, CocoPlusError> {
    ensure_box_columns(&boxes)?;
    let xy = boxes.slice(s![.., 0..2]);
    let size = boxes.slice(s![.., 2..4]);
    let far = &xy + &size.mapv(|v| (v - 1.0).max(0.0));
    Ok(concatenate(Axis(1), &[xy, far.view()])?)
}

/// Converts a batch of XYXY rows to XYWH rows.
///
/// Same unclamped semantics as [`xyxy_to_xywh`].
pub fn xyxy_to_xywh_batch(boxes: ArrayView2<'_, f64>) -> Result<Array2<f64>, CocoPlusError> {
    ensure_box_columns(&boxes)?;
    let near = boxes.slice(s![.., 0..2]);
    let far = boxes.slice(s![.., 2..4]);
    let size = &far - &near + 1.0;
    Ok(concatenate(Axis(1), &[near, size.view()])?)
}
