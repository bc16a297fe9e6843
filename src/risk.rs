//! Spill metrics: area, risk tier and confidence.
//!
//! Both tier tables are scanned top-down with a strict `>` comparison, so a
//! value sitting exactly on a boundary falls into the lower tier.

use crate::types::RiskLevel;

/// Pixel-count tiers, highest first.
const RISK_TIERS: [(u64, RiskLevel); 2] = [(100_000, RiskLevel::High), (5_000, RiskLevel::Medium)];

/// Coverage-ratio tiers `(ratio, confidence)`, highest first.
const CONFIDENCE_TIERS: [(f64, f64); 3] = [(0.05, 0.95), (0.02, 0.85), (0.005, 0.70)];

/// Confidence for a non-empty spill below every coverage tier.
const CONFIDENCE_FLOOR: f64 = 0.50;

/// Risk tier for an absolute spill pixel count.
pub fn risk_level_for(pixel_count: u64) -> RiskLevel {
    if pixel_count == 0 {
        return RiskLevel::None;
    }
    RISK_TIERS
        .iter()
        .find(|(limit, _)| pixel_count > *limit)
        .map_or(RiskLevel::Low, |&(_, level)| level)
}

/// Coverage fraction of the image; 0 for an empty image.
pub fn coverage_ratio(pixel_count: u64, total_pixels: u64) -> f64 {
    if total_pixels == 0 {
        return 0.0;
    }
    pixel_count as f64 / total_pixels as f64
}

/// Confidence heuristic from the spill-to-image coverage.
pub fn confidence_for(pixel_count: u64, total_pixels: u64) -> f64 {
    if pixel_count == 0 {
        return 0.0;
    }
    let ratio = coverage_ratio(pixel_count, total_pixels);
    CONFIDENCE_TIERS
        .iter()
        .find(|(limit, _)| ratio > *limit)
        .map_or(CONFIDENCE_FLOOR, |&(_, confidence)| confidence)
}

/// Area in km² at `pixels_per_km2`.
pub fn area_km2(pixel_count: u64, pixels_per_km2: f64) -> f64 {
    pixel_count as f64 / pixels_per_km2
}

/// All scalar metrics of one detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpillMetrics {
    pub pixel_count: u64,
    pub total_pixels: u64,
    pub coverage: f64,
    pub area_km2: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
}

impl SpillMetrics {
    pub fn assess(pixel_count: u64, total_pixels: u64, pixels_per_km2: f64) -> Self {
        Self {
            pixel_count,
            total_pixels,
            coverage: coverage_ratio(pixel_count, total_pixels),
            area_km2: area_km2(pixel_count, pixels_per_km2),
            confidence: confidence_for(pixel_count, total_pixels),
            risk_level: risk_level_for(pixel_count),
        }
    }
}
