#![allow(dead_code)]

use cocoplus::ir::{BBoxXYWH, BBoxXYXY};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Pixel coordinates are whole numbers in practice; keeping them integral
/// makes the `+ 1` / `- 1` arithmetic exact.
fn arb_pixel(min: i32, max: i32) -> impl Strategy<Value = f64> {
    (min..=max).prop_map(f64::from)
}

/// XYWH boxes with at least one pixel in each direction.
pub fn arb_xywh() -> impl Strategy<Value = BBoxXYWH> {
    (
        arb_pixel(-500, 2000),
        arb_pixel(-500, 2000),
        arb_pixel(1, 1000),
        arb_pixel(1, 1000),
    )
        .prop_map(|(x, y, w, h)| BBoxXYWH::new(x, y, w, h))
}

/// XYXY boxes with arbitrary, possibly swapped corners.
pub fn arb_xyxy() -> impl Strategy<Value = BBoxXYXY> {
    (
        arb_pixel(-3000, 3000),
        arb_pixel(-3000, 3000),
        arb_pixel(-3000, 3000),
        arb_pixel(-3000, 3000),
    )
        .prop_map(|(x1, y1, x2, y2)| BBoxXYXY::from_xyxy(x1, y1, x2, y2))
}

/// Image sizes from a single pixel up to a large frame.
pub fn arb_image_size() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=2160, 1u32..=3840)
}

pub fn rows<const N: usize, T>(boxes: &[T], to_array: impl Fn(&T) -> [f64; N]) -> Vec<[f64; N]> {
    boxes.iter().map(to_array).collect()
}
