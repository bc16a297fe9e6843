mod common;

use common::synthetic_image::{dark_prefix_rgb, paint, slick_disc_rgb, solid_rgb, swap_rb};
use oil_spill_detector::image::{ChannelOrder, ColorImageU8};
use oil_spill_detector::{
    parse_vessel_records, AssessmentReport, DetectionError, DetectorParams, RiskLevel,
    SpillDetector,
};
use std::ops::Range;

fn detector() -> SpillDetector {
    let _ = env_logger::builder().is_test(true).try_init();
    SpillDetector::new(DetectorParams::default())
}

fn rgb_view(w: usize, h: usize, data: &[u8]) -> ColorImageU8<'_> {
    ColorImageU8::packed(w, h, ChannelOrder::Rgb, data)
}

#[test]
fn clean_sea_has_no_spill_and_unchanged_annotation() {
    let (w, h) = (64, 48);
    let buffer = solid_rgb(w, h, [40, 60, 90]);
    let result = detector().detect(rgb_view(w, h, &buffer)).unwrap();

    assert_eq!(result.pixel_count, 0);
    assert_eq!(result.area_km2, 0.0);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.risk_level, RiskLevel::None);
    assert_eq!(result.annotated_image.as_bytes(), buffer.as_slice());
}

#[test]
fn risk_tiers_are_boundary_exact() {
    let (w, h) = (400, 300);
    let det = detector();
    let cases = [
        (1, RiskLevel::Low),
        (5_000, RiskLevel::Low),
        (5_001, RiskLevel::Medium),
        (100_000, RiskLevel::Medium),
        (100_001, RiskLevel::High),
    ];
    for (dark, expected) in cases {
        let buffer = dark_prefix_rgb(w, h, dark);
        let report = det.detect_with_diagnostics(rgb_view(w, h, &buffer)).unwrap();
        assert_eq!(report.result.pixel_count, dark as u64);
        assert_eq!(report.result.risk_level, expected, "dark={dark}");
        // The prefix starts at the top-left corner and is one region.
        assert_eq!(report.trace.contours.count, 1, "dark={dark}");
        let corner = report.result.annotated_image.pixel(0, 0);
        assert!(corner[0] >= 102 && corner[1] == 0 && corner[2] == 0, "dark={dark}");
    }
}

#[test]
fn confidence_tiers_are_boundary_exact() {
    let (w, h) = (100, 100);
    let det = detector();
    let cases = [
        (501, 0.95),
        (500, 0.85),
        (201, 0.85),
        (200, 0.70),
        (51, 0.70),
        (50, 0.50),
        (1, 0.50),
    ];
    for (dark, expected) in cases {
        let buffer = dark_prefix_rgb(w, h, dark);
        let result = det.detect(rgb_view(w, h, &buffer)).unwrap();
        assert_eq!(result.confidence, expected, "dark={dark}");
    }
}

#[test]
fn disc_slick_is_measured_and_highlighted() {
    let (w, h) = (200, 160);
    let buffer = slick_disc_rgb(w, h, 100.0, 80.0, 30.0);
    let expected_pixels = buffer.chunks_exact(3).filter(|px| px[0] == 8).count() as u64;

    let report = detector()
        .detect_with_diagnostics(rgb_view(w, h, &buffer))
        .unwrap();
    let result = &report.result;

    assert_eq!(result.pixel_count, expected_pixels);
    assert_eq!(result.area_km2, expected_pixels as f64 / 1_000_000.0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.confidence, 0.95);
    assert_eq!(report.trace.contours.count, 1);
    assert!(report.trace.contours.point_count >= 4);

    let out = &result.annotated_image;
    assert_eq!((out.width(), out.height()), (w, h));
    // Centre of the slick: 0.4 * red over the dark pixel.
    assert_eq!(out.pixel(100, 80), [107, 5, 7]);
    // Open sea far from the slick is untouched.
    assert_eq!(out.pixel(5, 5), [120, 140, 160]);
    // Input buffer is not modified.
    assert_eq!(buffer[(80 * w + 100) * 3], 8);
}

#[test]
fn ring_hole_is_tinted_but_not_counted() {
    let (w, h) = (40, 40);
    let mut buffer = solid_rgb(w, h, [200, 200, 200]);
    paint(&mut buffer, w, [0, 0, 0], |x, y| {
        (10..30).contains(&x) && (10..30).contains(&y)
    });
    paint(&mut buffer, w, [200, 200, 200], |x, y| {
        (15..25).contains(&x) && (15..25).contains(&y)
    });

    let report = detector()
        .detect_with_diagnostics(rgb_view(w, h, &buffer))
        .unwrap();
    assert_eq!(report.result.pixel_count, 20 * 20 - 10 * 10);
    assert_eq!(report.trace.contours.count, 1);
    // Hole centre: 0.4 * red + 0.6 * 200.
    assert_eq!(report.result.annotated_image.pixel(20, 20), [222, 120, 120]);
}

fn block_scene(w: usize, h: usize, xs: Range<usize>, ys: Range<usize>) -> Vec<u8> {
    let mut buffer = solid_rgb(w, h, [200, 200, 200]);
    paint(&mut buffer, w, [0, 0, 0], |x, y| xs.contains(&x) && ys.contains(&y));
    buffer
}

#[test]
fn slicks_touching_the_border_are_outlined() {
    let (w, h) = (20, 20);
    // (columns, rows, interior pixel, outline pixel)
    let cases = [
        (0..6, 5..15, (2, 9), (0, 10)),
        (8..14, 0..4, (11, 1), (8, 2)),
        (14..20, 8..12, (16, 9), (19, 9)),
    ];
    let det = detector();
    for (xs, ys, interior, outline) in cases {
        let buffer = block_scene(w, h, xs.clone(), ys.clone());
        let report = det.detect_with_diagnostics(rgb_view(w, h, &buffer)).unwrap();
        let label = format!("x={xs:?} y={ys:?}");
        assert_eq!(report.result.pixel_count, (xs.len() * ys.len()) as u64, "{label}");
        assert_eq!(report.trace.contours.count, 1, "{label}");

        let out = &report.result.annotated_image;
        assert_eq!(out.pixel(interior.0, interior.1), [102, 0, 0], "{label}");
        assert_eq!(out.pixel(outline.0, outline.1), [255, 0, 0], "{label}");
        assert_eq!(out.pixel(10, 17), [200, 200, 200], "{label}");
    }
}

#[test]
fn fully_dark_frame_is_one_slick() {
    let (w, h) = (10, 10);
    let buffer = solid_rgb(w, h, [0, 0, 0]);
    let report = detector()
        .detect_with_diagnostics(rgb_view(w, h, &buffer))
        .unwrap();
    assert_eq!(report.result.pixel_count, 100);
    assert_eq!(report.result.confidence, 0.95);
    assert_eq!(report.trace.contours.count, 1);

    let out = &report.result.annotated_image;
    assert_eq!(out.pixel(5, 5), [102, 0, 0]);
    assert_eq!(out.pixel(0, 5), [255, 0, 0]);
    assert_eq!(out.pixel(9, 9), [255, 0, 0]);
}

#[test]
fn luminance_weights_decide_membership() {
    let (w, h) = (8, 1);
    let mut buffer = solid_rgb(w, h, [255, 255, 255]);
    // Deep blue: luma 23, spill.
    buffer[0..3].copy_from_slice(&[0, 0, 200]);
    // Dark red: luma 30, not below the threshold.
    buffer[3..6].copy_from_slice(&[100, 0, 0]);
    let result = detector().detect(rgb_view(w, h, &buffer)).unwrap();
    assert_eq!(result.pixel_count, 1);
}

#[test]
fn channel_order_only_moves_the_highlight() {
    let (w, h) = (60, 60);
    let rgb = slick_disc_rgb(w, h, 30.0, 30.0, 12.0);
    let bgr = swap_rb(&rgb);
    let det = detector();

    let from_rgb = det.detect(rgb_view(w, h, &rgb)).unwrap();
    let from_bgr = det
        .detect(ColorImageU8::packed(w, h, ChannelOrder::Bgr, &bgr))
        .unwrap();

    assert_eq!(from_rgb.pixel_count, from_bgr.pixel_count);
    assert_eq!(from_rgb.risk_level, from_bgr.risk_level);
    assert_eq!(from_rgb.confidence, from_bgr.confidence);
    assert_eq!(
        from_rgb.annotated_image.as_bytes(),
        swap_rb(from_bgr.annotated_image.as_bytes()).as_slice()
    );
}

#[test]
fn strided_view_matches_packed_view() {
    let (w, h) = (50, 40);
    let packed = slick_disc_rgb(w, h, 25.0, 20.0, 9.0);
    let stride = w * 3 + 7;
    let mut strided = vec![0u8; stride * h];
    for y in 0..h {
        strided[y * stride..y * stride + w * 3].copy_from_slice(&packed[y * w * 3..(y + 1) * w * 3]);
    }
    let view = ColorImageU8 {
        w,
        h,
        stride,
        order: ChannelOrder::Rgb,
        data: &strided,
    };

    let det = detector();
    let a = det.detect(rgb_view(w, h, &packed)).unwrap();
    let b = det.detect(view).unwrap();
    assert_eq!(a, b);
}

#[test]
fn degenerate_dimensions_yield_zero_metrics() {
    let det = detector();
    for (w, h) in [(0, 0), (0, 12), (12, 0)] {
        let result = det.detect(rgb_view(w, h, &[])).unwrap();
        assert_eq!(result.pixel_count, 0);
        assert_eq!(result.risk_level, RiskLevel::None);
        assert_eq!(result.confidence, 0.0);
        assert!(result.annotated_image.as_bytes().is_empty());
    }
}

#[test]
fn truncated_buffer_is_rejected() {
    let buffer = vec![0u8; 10 * 10 * 3 - 1];
    let err = detector().detect(rgb_view(10, 10, &buffer)).unwrap_err();
    assert_eq!(
        err,
        DetectionError::BufferTooSmall {
            required: 300,
            actual: 299
        }
    );
}

#[test]
fn assessment_merges_detection_and_vessels() {
    let (w, h) = (100, 100);
    let buffer = dark_prefix_rgb(w, h, 1_234);
    let result = detector().detect(rgb_view(w, h, &buffer)).unwrap();
    let vessels = parse_vessel_records(
        b"Name,Type,Latitude,Longitude,MMSI\nAtlantic Star,Tanker,34.05,-118.25,123456789\n",
    );

    let report = AssessmentReport::build(&result, vessels).unwrap();
    assert_eq!(report.area, 0.0012);
    assert_eq!(report.pixel_count, 1_234);
    assert_eq!(report.confidence, 0.95);
    assert_eq!(report.risk_level, "Low");
    assert_eq!(report.vessels, vec!["Atlantic Star (Tanker) at 34.05,-118.25"]);

    let png = report.image_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().into_rgb8();
    assert_eq!(decoded.dimensions(), (100, 100));
}
