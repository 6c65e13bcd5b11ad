// src/config/analysis_config.rs
//! Analysis configuration with one-shot validation and TOML loading

use crate::config::constants::{detection, signal};
use crate::error::MotionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration for one analysis pipeline.
///
/// The defaults reproduce the fixed build-time constants; when a config is
/// loaded from a file instead, it is validated once at startup and never
/// re-checked on the hot path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// IMU sample rate in Hz
    pub sample_rate_hz: u32,
    /// Samples per analysis window
    pub window_len: usize,
    /// Tremor band (low, high) in Hz
    pub tremor_band_hz: (f32, f32),
    /// Dyskinesia band (low, high) in Hz
    pub dyskinesia_band_hz: (f32, f32),
    /// Reference background band (low, high) in Hz
    pub background_band_hz: (f32, f32),
    /// Minimum band intensity for a positive detection
    pub detect_threshold: f32,
    /// Band intensity must exceed background times this ratio
    pub background_ratio: f32,
    /// Minimum prior cadence (steps/s) for the FOG rule
    pub cadence_min: f32,
    /// Variance ceiling for a frozen segment
    pub freeze_var_max: f32,
    /// Last/first variance ratio ceiling for a sudden stop
    pub freeze_drop: f32,
    /// Variance scale of the FOG intensity mapping
    pub fog_intensity_var: f32,
    /// Step threshold offset in standard deviations
    pub step_k: f32,
    /// Peak weight in the combined band energy
    pub band_peak_weight: f32,
    /// Mean weight in the combined band energy
    pub band_avg_weight: f32,
    /// Divisor clamping band intensity into [0, 1]
    pub band_norm: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: signal::SAMPLE_RATE_HZ,
            window_len: signal::WINDOW_LEN,
            tremor_band_hz: detection::TREMOR_BAND_HZ,
            dyskinesia_band_hz: detection::DYSKINESIA_BAND_HZ,
            background_band_hz: detection::BACKGROUND_BAND_HZ,
            detect_threshold: detection::DETECT_THRESHOLD,
            background_ratio: detection::BACKGROUND_RATIO,
            cadence_min: detection::CADENCE_MIN,
            freeze_var_max: detection::FREEZE_VAR_MAX,
            freeze_drop: detection::FREEZE_DROP,
            fog_intensity_var: detection::FOG_INTENSITY_VAR,
            step_k: detection::STEP_K,
            band_peak_weight: detection::BAND_PEAK_WEIGHT,
            band_avg_weight: detection::BAND_AVG_WEIGHT,
            band_norm: detection::BAND_NORM,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a TOML file and validate it.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, MotionError> {
        let text = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Degenerate windows and rates are rejected here so the pipeline can
    /// assume a usable geometry everywhere else.
    pub fn validate(&self) -> Result<(), MotionError> {
        if self.sample_rate_hz < signal::MIN_SAMPLE_RATE_HZ {
            return Err(MotionError::Configuration(format!(
                "sample rate {} Hz below minimum {}",
                self.sample_rate_hz,
                signal::MIN_SAMPLE_RATE_HZ
            )));
        }
        if self.window_len < signal::MIN_WINDOW_LEN {
            return Err(MotionError::Configuration(format!(
                "window length {} below minimum {}",
                self.window_len,
                signal::MIN_WINDOW_LEN
            )));
        }

        for (name, band) in [
            ("tremor", self.tremor_band_hz),
            ("dyskinesia", self.dyskinesia_band_hz),
            ("background", self.background_band_hz),
        ] {
            if band.0 < 0.0 || band.1 < band.0 {
                return Err(MotionError::Configuration(format!(
                    "{} band [{}, {}] Hz is not a valid range",
                    name, band.0, band.1
                )));
            }
        }

        if self.detect_threshold <= 0.0 || self.detect_threshold >= 1.0 {
            return Err(MotionError::Configuration(format!(
                "detect threshold {} outside (0, 1)",
                self.detect_threshold
            )));
        }
        if self.background_ratio < 1.0 {
            return Err(MotionError::Configuration(
                "background ratio must be at least 1.0".to_string(),
            ));
        }
        if self.band_norm <= 0.0 {
            return Err(MotionError::Configuration(
                "band norm must be positive".to_string(),
            ));
        }
        if self.band_peak_weight < 0.0 || self.band_avg_weight < 0.0 {
            return Err(MotionError::Configuration(
                "band energy weights must be non-negative".to_string(),
            ));
        }
        if self.freeze_var_max <= 0.0 || self.fog_intensity_var <= 0.0 {
            return Err(MotionError::Configuration(
                "variance thresholds must be positive".to_string(),
            ));
        }
        if self.freeze_drop <= 0.0 || self.freeze_drop >= 1.0 {
            return Err(MotionError::Configuration(format!(
                "freeze drop ratio {} outside (0, 1)",
                self.freeze_drop
            )));
        }
        if self.cadence_min < 0.0 || self.step_k < 0.0 {
            return Err(MotionError::Configuration(
                "cadence minimum and step threshold offset must be non-negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Window duration in seconds.
    pub fn window_seconds(&self) -> f32 {
        self.window_len as f32 / self.sample_rate_hz as f32
    }

    /// Sample period in nanoseconds.
    pub fn sample_period_nanos(&self) -> u64 {
        signal::NANOSECONDS_PER_SECOND / self.sample_rate_hz as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_rate_hz, 52);
        assert_eq!(config.window_len, 156);
        assert!((config.window_seconds() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_window_rejected() {
        let mut config = AnalysisConfig::default();
        config.window_len = 5;
        assert!(matches!(
            config.validate(),
            Err(MotionError::Configuration(_))
        ));

        let mut config = AnalysisConfig::default();
        config.sample_rate_hz = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let mut config = AnalysisConfig::default();
        config.tremor_band_hz = (5.0, 3.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_thresholds_rejected() {
        let mut config = AnalysisConfig::default();
        config.detect_threshold = 0.0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.freeze_drop = 1.5;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.band_norm = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalysisConfig::default();
        let text = toml::to_string(&config).expect("serialize config");

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write config");

        let loaded = AnalysisConfig::from_toml_file(file.path()).expect("load config");
        assert_eq!(loaded.window_len, config.window_len);
        assert_eq!(loaded.tremor_band_hz, config.tremor_band_hz);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"window_len = 104\n").expect("write config");

        let loaded = AnalysisConfig::from_toml_file(file.path()).expect("load config");
        assert_eq!(loaded.window_len, 104);
        assert_eq!(loaded.sample_rate_hz, 52);
    }

    #[test]
    fn test_invalid_toml_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"window_len = 2\n").expect("write config");
        assert!(AnalysisConfig::from_toml_file(file.path()).is_err());
    }
}
