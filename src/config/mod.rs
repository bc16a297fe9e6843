//! JSON configuration for the command-line tools.

pub mod spill_report;

pub use spill_report::{load_config, SpillOutputConfig, SpillReportConfig};
