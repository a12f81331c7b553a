//! Clipping boxes to image bounds.

use ndarray::ArrayViewMut2;

use super::ensure_box_columns;
use crate::error::CocoPlusError;
use crate::ir::{BBoxXYXY, Coord};

/// Clamps `value` into `[0, limit]` as `min(max(value, 0), limit)`.
///
/// Unlike `f64::clamp` this never panics; when `limit` is negative (a
/// zero-sized image) the result is `limit`.
#[inline]
fn clamp_coord(value: f64, limit: f64) -> f64 {
    value.max(0.0).min(limit)
}

/// Returns `bbox` with x clamped to `[0, width - 1]` and y to `[0, height - 1]`.
pub fn clip_box_to_image(bbox: BBoxXYXY, height: u32, width: u32) -> BBoxXYXY {
    let max_x = f64::from(width) - 1.0;
    let max_y = f64::from(height) - 1.0;
    BBoxXYXY::new(
        Coord::new(clamp_coord(bbox.x1(), max_x), clamp_coord(bbox.y1(), max_y)),
        Coord::new(clamp_coord(bbox.x2(), max_x), clamp_coord(bbox.y2(), max_y)),
    )
}

/// Clips every XYXY row of `boxes` to the image, in place.
///
/// Columns 0 and 2 are clamped to `[0, width - 1]`, columns 1 and 3 to
/// `[0, height - 1]`. Out-of-range values are never rejected; the only
/// error is a batch that does not have 4 columns.
pub fn clip_boxes_to_image(
    mut boxes: ArrayViewMut2<'_, f64>,
    height: u32,
    width: u32,
) -> Result<(), CocoPlusError> {
    ensure_box_columns(&boxes)?;
    let max_x = f64::from(width) - 1.0;
    let max_y = f64::from(height) - 1.0;
    for mut row in boxes.rows_mut() {
        for (col, value) in row.iter_mut().enumerate() {
            let limit = if col % 2 == 0 { max_x } else { max_y };
            *value = clamp_coord(*value, limit);
        }
    }
    log::trace!("clipped {} box(es) to {}x{}", boxes.nrows(), width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_clip_batch_to_image() {
        let mut boxes = array![[-5.0, -5.0, 300.0, 300.0]];
        clip_boxes_to_image(boxes.view_mut(), 100, 200).unwrap();
        assert_eq!(boxes, array![[0.0, 0.0, 199.0, 99.0]]);
    }

    #[test]
    fn test_clip_leaves_inside_boxes_untouched() {
        let mut boxes = array![[1.0, 2.0, 30.0, 40.0], [0.0, 0.0, 199.0, 99.0]];
        let original = boxes.clone();
        clip_boxes_to_image(boxes.view_mut(), 100, 200).unwrap();
        assert_eq!(boxes, original);
    }

    #[test]
    fn test_clip_single_box() {
        let clipped = clip_box_to_image(BBoxXYXY::from_xyxy(-5.0, 50.0, 300.0, 120.0), 100, 200);
        assert_eq!(clipped, BBoxXYXY::from_xyxy(0.0, 50.0, 199.0, 99.0));
    }

    #[test]
    fn test_clip_zero_sized_image_does_not_panic() {
        let clipped = clip_box_to_image(BBoxXYXY::from_xyxy(5.0, 5.0, 10.0, 10.0), 0, 0);
        assert_eq!(clipped, BBoxXYXY::from_xyxy(-1.0, -1.0, -1.0, -1.0));
    }

    #[test]
    fn test_clip_rejects_wrong_column_count() {
        let mut boxes = array![[1.0, 2.0]];
        let err = clip_boxes_to_image(boxes.view_mut(), 10, 10).unwrap_err();
        assert!(matches!(err, CocoPlusError::BoxShape { columns: 2 }));
    }
}
