use oil_spill_detector::config::{load_config, SpillReportConfig};
use oil_spill_detector::image::io::{
    load_color_image, save_color_png, save_grayscale_u8, write_json_file,
};
use oil_spill_detector::segmentation::{luminance, SpillMask};
use oil_spill_detector::{parse_vessel_records, AssessmentReport, DetectionReport, SpillDetector};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_color_image(&config.input)?;
    let detector = SpillDetector::new(config.detector.clone());
    let report = detector
        .detect_with_diagnostics(image.as_view())
        .map_err(|e| format!("Failed to process {}: {e}", config.input.display()))?;

    let vessels = match &config.ais {
        Some(path) => {
            let raw = fs::read(path)
                .map_err(|e| format!("Failed to read AIS file {}: {e}", path.display()))?;
            parse_vessel_records(&raw)
        }
        None => Vec::new(),
    };

    print_text_summary(&report, vessels.len());

    save_color_png(&report.result.annotated_image, &config.output.annotated_image)?;
    println!(
        "Saved annotated image to {}",
        config.output.annotated_image.display()
    );

    let assessment = AssessmentReport::build(&report.result, vessels)?;
    write_json_file(&config.output.report_json, &assessment)?;
    println!("Saved report to {}", config.output.report_json.display());

    save_optional_artifacts(&config, &detector, &image, &report)?;

    Ok(())
}

fn save_optional_artifacts(
    config: &SpillReportConfig,
    detector: &SpillDetector,
    image: &oil_spill_detector::image::ColorImage,
    report: &DetectionReport,
) -> Result<(), String> {
    if let Some(path) = &config.output.mask_image {
        let gray = luminance(&image.as_view());
        let mask = SpillMask::from_gray(gray.as_view(), detector.params().threshold);
        save_grayscale_u8(&mask.to_gray(), path)?;
        println!("Saved spill mask to {}", path.display());
    }
    if let Some(path) = &config.output.trace_json {
        write_json_file(path, &report.trace)?;
        println!("Saved detector trace to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(report: &DetectionReport, vessel_count: usize) {
    let res = &report.result;
    let trace = &report.trace;
    println!("Spill assessment");
    println!("  image: {}x{}", trace.input.width, trace.input.height);
    println!("  pixel_count: {}", res.pixel_count);
    println!("  coverage: {:.5}", trace.mask.coverage);
    println!("  area_km2: {:.4}", res.area_km2);
    println!("  confidence: {:.2}", res.confidence);
    println!("  risk_level: {}", res.risk_level);
    println!(
        "  contours: {} ({} points)",
        trace.contours.count, trace.contours.point_count
    );
    println!("  vessels: {vessel_count}");

    let stages: Vec<String> = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "Timings (ms): {} total={:.3}",
        stages.join(" "),
        trace.timings.total_ms
    );
}

fn usage() -> String {
    "Usage: spill_report <config.json>".to_string()
}
