// src/lib.rs
//! Parkinsonian motion-symptom analysis core
//!
//! Real-time classification of tremor, dyskinesia and freezing of gait
//! from a wearable 6-DoF IMU stream.

#![doc = include_str!("../README.md")]

pub mod config;
pub mod hal;
pub mod processing;
pub mod runner;
mod error;
pub mod utils;

pub use config::AnalysisConfig;
pub use error::MotionError;
pub use hal::{ImuDevice, ImuSample, ResultSink, Scenario, SimulatorConfig, SimulatorDevice};
pub use processing::{SampleWindow, SymptomPipeline, SymptomResult, WindowView};
pub use runner::{AnalysisRunner, RunStats, RunnerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for motion-analysis operations
pub type MotionResult<T> = Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config_matches_wearable_geometry() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sample_rate_hz, 52);
        assert_eq!(config.window_len, 156);
    }
}
