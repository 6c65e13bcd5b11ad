// src/processing/pipeline.rs
//! Symptom pipeline: one full window in, one result record out

use crate::config::AnalysisConfig;
use crate::error::MotionError;
use crate::processing::band_energy::BandEnergyEstimator;
use crate::processing::fog::FogDiscriminator;
use crate::processing::gait::GaitAnalyzer;
use crate::processing::stats::{magnitude_series, mean};
use crate::processing::window::WindowView;
use serde::Serialize;

/// Per-window classification of the three motor phenomena.
///
/// Detection flags and intensities are independent outputs: an intensity
/// may be non-zero for an undetected symptom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SymptomResult {
    pub tremor_detected: bool,
    pub tremor_intensity: f32,
    pub dyskinesia_detected: bool,
    pub dyskinesia_intensity: f32,
    pub fog_detected: bool,
    pub fog_intensity: f32,
}

impl SymptomResult {
    pub fn any_detected(&self) -> bool {
        self.tremor_detected || self.dyskinesia_detected || self.fog_detected
    }
}

/// Orchestrates preprocessing and the per-symptom analyses over one window.
///
/// Scratch buffers are allocated once at construction; `analyze` does not
/// allocate in the steady state.
pub struct SymptomPipeline {
    config: AnalysisConfig,
    estimator: BandEnergyEstimator,
    gait: GaitAnalyzer,
    fog: FogDiscriminator,
    centered_x: Vec<f32>,
    centered_y: Vec<f32>,
    centered_z: Vec<f32>,
    accel_magnitude: Vec<f32>,
    gyro_magnitude: Vec<f32>,
}

impl SymptomPipeline {
    pub fn new(config: AnalysisConfig) -> Result<Self, MotionError> {
        config.validate()?;
        let estimator = BandEnergyEstimator::new(&config);
        let gait = GaitAnalyzer::new(&config);
        let fog = FogDiscriminator::new(&config);
        let n = config.window_len;

        Ok(Self {
            config,
            estimator,
            gait,
            fog,
            centered_x: Vec::with_capacity(n),
            centered_y: Vec::with_capacity(n),
            centered_z: Vec::with_capacity(n),
            accel_magnitude: Vec::with_capacity(n),
            gyro_magnitude: Vec::with_capacity(n),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one complete window.
    ///
    /// Non-finite samples are a programming error upstream; they are
    /// asserted against in debug builds, and in release builds the analysis
    /// still terminates without corrupting later windows (all state below
    /// is recomputed from scratch each call).
    pub fn analyze(&mut self, window: &WindowView<'_>) -> SymptomResult {
        debug_assert!(
            window
                .accel_x
                .iter()
                .chain(window.accel_y)
                .chain(window.accel_z)
                .chain(window.gyro_x)
                .chain(window.gyro_y)
                .chain(window.gyro_z)
                .all(|v| v.is_finite()),
            "non-finite sample entered the analysis window"
        );

        // raw accelerometer magnitude, shared by the gait and FOG analyses
        magnitude_series(
            window.accel_x,
            window.accel_y,
            window.accel_z,
            &mut self.accel_magnitude,
        );

        // a window with no accelerometer signal at all carries nothing to
        // classify; report the all-clear record
        if self.accel_magnitude.iter().all(|&m| m == 0.0) {
            return SymptomResult::default();
        }

        // DC removal on the accelerometer axes for the spectral analyses
        center(window.accel_x, &mut self.centered_x);
        center(window.accel_y, &mut self.centered_y);
        center(window.accel_z, &mut self.centered_z);

        let background = self.estimator.three_axis(
            &self.centered_x,
            &self.centered_y,
            &self.centered_z,
            self.config.background_band_hz,
        );

        let tremor_intensity = self.estimator.three_axis(
            &self.centered_x,
            &self.centered_y,
            &self.centered_z,
            self.config.tremor_band_hz,
        );
        let tremor_detected = tremor_intensity > self.config.detect_threshold
            && tremor_intensity > self.config.background_ratio * background;

        let dyskinesia_intensity = self.estimator.three_axis(
            &self.centered_x,
            &self.centered_y,
            &self.centered_z,
            self.config.dyskinesia_band_hz,
        );
        let dyskinesia_detected = dyskinesia_intensity > self.config.detect_threshold
            && dyskinesia_intensity > self.config.background_ratio * background;

        let cadence = self.gait.analyze(&self.accel_magnitude);

        magnitude_series(
            window.gyro_x,
            window.gyro_y,
            window.gyro_z,
            &mut self.gyro_magnitude,
        );
        let fog = self
            .fog
            .evaluate(&self.accel_magnitude, &self.gyro_magnitude, cadence);

        SymptomResult {
            tremor_detected,
            tremor_intensity,
            dyskinesia_detected,
            dyskinesia_intensity,
            fog_detected: fog.detected,
            fog_intensity: fog.intensity,
        }
    }
}

/// DC-removed copy: centered = raw - mean(raw).
fn center(raw: &[f32], out: &mut Vec<f32>) {
    let mu = mean(raw);
    out.clear();
    out.extend(raw.iter().map(|v| v - mu));
}
