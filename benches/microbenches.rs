//! Criterion microbenches for cocoplus box operations.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Batch layout conversion (xywh_to_xyxy_batch, xyxy_to_xywh_batch)
//! - Batch clipping (clip_boxes_to_image)
//! - Box drawing on an RGB buffer (draw_xyxy_bbox)

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::hint::black_box;

use cocoplus::annotate::{Annotator, BoxStyle, ColorFormat};
use cocoplus::boxes::{
    batch_from_rows, clip_boxes_to_image, xywh_to_xyxy_batch, xyxy_rows, xyxy_to_xywh_batch,
};
use image::RgbImage;
use ndarray::Array2;

const BATCH_SIZE: usize = 1024;

/// A deterministic spread of boxes, some hanging off a 640x480 frame.
fn sample_batch() -> Array2<f64> {
    let rows: Vec<[f64; 4]> = (0..BATCH_SIZE)
        .map(|i| {
            let i = i as f64;
            [
                (i * 7.0) % 700.0 - 30.0,
                (i * 13.0) % 520.0 - 20.0,
                (i * 3.0) % 120.0 + 1.0,
                (i * 5.0) % 90.0 + 1.0,
            ]
        })
        .collect();
    batch_from_rows(&rows)
}

fn bench_convert(c: &mut Criterion) {
    let batch = sample_batch();
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    group.bench_function("xywh_to_xyxy_batch", |b| {
        b.iter(|| xywh_to_xyxy_batch(black_box(batch.view())).unwrap())
    });

    let corners = xywh_to_xyxy_batch(batch.view()).unwrap();
    group.bench_function("xyxy_to_xywh_batch", |b| {
        b.iter(|| xyxy_to_xywh_batch(black_box(corners.view())).unwrap())
    });

    group.finish();
}

fn bench_clip(c: &mut Criterion) {
    let corners = xywh_to_xyxy_batch(sample_batch().view()).unwrap();
    let mut group = c.benchmark_group("clip");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    group.bench_function("clip_boxes_to_image", |b| {
        b.iter_batched(
            || corners.clone(),
            |mut boxes| {
                clip_boxes_to_image(boxes.view_mut(), 480, 640).unwrap();
                black_box(boxes)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let corners = xywh_to_xyxy_batch(sample_batch().view()).unwrap();
    let boxes = xyxy_rows(&corners).unwrap();
    let annotator = Annotator::new(ColorFormat::Rgb);
    let style = BoxStyle::default();
    let mut group = c.benchmark_group("draw");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    group.bench_function("draw_xyxy_bbox", |b| {
        b.iter_batched(
            || RgbImage::new(640, 480),
            |mut img| {
                annotator
                    .draw_xyxy_bbox(&mut img, black_box(&boxes), &style, None)
                    .unwrap();
                black_box(img)
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_clip, bench_draw);
criterion_main!(benches);
