//! Box layout conversion and clipping.
//!
//! Every operation comes in two named forms: one working on a single typed
//! box ([`BBoxXYWH`](crate::ir::BBoxXYWH) / [`BBoxXYXY`](crate::ir::BBoxXYXY))
//! and a `_batch` / plural form working on an `ndarray` matrix with one box
//! per row. Batches must have exactly 4 columns.

mod clip;
mod convert;

pub use clip::{clip_box_to_image, clip_boxes_to_image};
pub use convert::{xywh_to_xyxy, xywh_to_xyxy_batch, xyxy_to_xywh, xyxy_to_xywh_batch};

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::error::CocoPlusError;
use crate::ir::{BBoxXYWH, BBoxXYXY};

/// The two box layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxFormat {
    /// Top-left corner plus width and height.
    Xywh,
    /// Two opposite corners.
    Xyxy,
}

impl FromStr for BoxFormat {
    type Err = CocoPlusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xywh" => Ok(BoxFormat::Xywh),
            "xyxy" => Ok(BoxFormat::Xyxy),
            _ => Err(CocoPlusError::UnsupportedBoxFormat(s.to_string())),
        }
    }
}

impl fmt::Display for BoxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxFormat::Xywh => write!(f, "xywh"),
            BoxFormat::Xyxy => write!(f, "xyxy"),
        }
    }
}

/// Number of columns in a box batch.
pub const BOX_COLUMNS: usize = 4;

/// Checks that a batch has one box per row in 4 columns.
pub(crate) fn ensure_box_columns<S: Data>(boxes: &ArrayBase<S, Ix2>) -> Result<(), CocoPlusError> {
    if boxes.ncols() != BOX_COLUMNS {
        return Err(CocoPlusError::BoxShape {
            columns: boxes.ncols(),
        });
    }
    Ok(())
}

/// Builds a batch matrix from a list of 4-number rows.
pub fn batch_from_rows(rows: &[[f64; 4]]) -> Array2<f64> {
    Array2::from(rows.to_vec())
}

/// Reads every row of a batch as an XYXY box.
pub fn xyxy_rows<S: Data<Elem = f64>>(
    boxes: &ArrayBase<S, Ix2>,
) -> Result<Vec<BBoxXYXY>, CocoPlusError> {
    ensure_box_columns(boxes)?;
    Ok(boxes
        .rows()
        .into_iter()
        .map(|row| BBoxXYXY::from_xyxy(row[0], row[1], row[2], row[3]))
        .collect())
}

/// Reads every row of a batch as an XYWH box.
pub fn xywh_rows<S: Data<Elem = f64>>(
    boxes: &ArrayBase<S, Ix2>,
) -> Result<Vec<BBoxXYWH>, CocoPlusError> {
    ensure_box_columns(boxes)?;
    Ok(boxes
        .rows()
        .into_iter()
        .map(|row| BBoxXYWH::new(row[0], row[1], row[2], row[3]))
        .collect())
}
