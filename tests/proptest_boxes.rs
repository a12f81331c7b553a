use cocoplus::boxes::{
    batch_from_rows, clip_box_to_image, clip_boxes_to_image, xywh_to_xyxy, xywh_to_xyxy_batch,
    xyxy_rows, xyxy_to_xywh, xyxy_to_xywh_batch,
};
use cocoplus::ir::{BBoxXYWH, BBoxXYXY};
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn xywh_roundtrip_preserves_positive_sizes(bbox in proptest_helpers::arb_xywh()) {
        let restored = xyxy_to_xywh(xywh_to_xyxy(bbox));
        prop_assert_eq!(restored, bbox);
    }

    #[test]
    fn xywh_to_xyxy_never_puts_far_corner_before_near(bbox in proptest_helpers::arb_xywh()) {
        let corners = xywh_to_xyxy(bbox);
        prop_assert!(corners.is_ordered());
        prop_assert_eq!(corners.x1(), bbox.x);
        prop_assert_eq!(corners.y1(), bbox.y);
    }

    #[test]
    fn batch_conversion_matches_single_box(
        boxes in prop::collection::vec(proptest_helpers::arb_xywh(), 0..16)
    ) {
        let batch = batch_from_rows(&proptest_helpers::rows(&boxes, BBoxXYWH::to_array));
        let converted = xywh_to_xyxy_batch(batch.view()).unwrap();
        let expected: Vec<BBoxXYXY> = boxes.iter().copied().map(xywh_to_xyxy).collect();
        prop_assert_eq!(xyxy_rows(&converted).unwrap(), expected);

        let back = xyxy_to_xywh_batch(converted.view()).unwrap();
        prop_assert_eq!(back, batch);
    }

    #[test]
    fn clipped_box_lies_inside_image(
        bbox in proptest_helpers::arb_xyxy(),
        (height, width) in proptest_helpers::arb_image_size(),
    ) {
        let clipped = clip_box_to_image(bbox, height, width);
        for x in [clipped.x1(), clipped.x2()] {
            prop_assert!((0.0..=f64::from(width - 1)).contains(&x));
        }
        for y in [clipped.y1(), clipped.y2()] {
            prop_assert!((0.0..=f64::from(height - 1)).contains(&y));
        }
    }

    #[test]
    fn clipping_is_idempotent(
        bbox in proptest_helpers::arb_xyxy(),
        (height, width) in proptest_helpers::arb_image_size(),
    ) {
        let once = clip_box_to_image(bbox, height, width);
        prop_assert_eq!(clip_box_to_image(once, height, width), once);
    }

    #[test]
    fn batch_clipping_matches_single_box(
        boxes in prop::collection::vec(proptest_helpers::arb_xyxy(), 1..16),
        (height, width) in proptest_helpers::arb_image_size(),
    ) {
        let mut batch = batch_from_rows(&proptest_helpers::rows(&boxes, BBoxXYXY::to_array));
        clip_boxes_to_image(batch.view_mut(), height, width).unwrap();
        let expected: Vec<BBoxXYXY> = boxes
            .iter()
            .map(|bbox| clip_box_to_image(*bbox, height, width))
            .collect();
        prop_assert_eq!(xyxy_rows(&batch).unwrap(), expected);
    }
}
