use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SpillReportConfig {
    /// Image to analyse (any format the `image` crate decodes).
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Optional AIS vessel list (CSV, TSV or free text).
    #[serde(default)]
    pub ais: Option<PathBuf>,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: SpillOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SpillOutputConfig {
    #[serde(rename = "annotated_image")]
    pub annotated_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Optional 0/255 PNG of the spill mask.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
    /// Optional JSON dump of the detector trace (contours and timings).
    #[serde(default)]
    pub trace_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SpillReportConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<SpillReportConfig, String> {
    let config: SpillReportConfig = serde_json::from_str(data).map_err(|e| e.to_string())?;
    config.detector.validate()?;
    Ok(config)
}
