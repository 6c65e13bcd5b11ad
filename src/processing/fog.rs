// src/processing/fog.rs
//! Freezing-of-gait discrimination over one analysis window

use crate::config::AnalysisConfig;
use crate::processing::stats::variance;

/// FOG verdict for one window.
///
/// Intensity is a continuous stillness score reported independently of the
/// boolean verdict; consumers must not derive one from the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogVerdict {
    pub detected: bool,
    pub intensity: f32,
}

/// Evaluates the three-way conjunctive freeze rule.
///
/// The window splits into thirds of floor(N/3) samples; the first third
/// models the walking baseline, the last third the candidate freeze, and
/// remainder samples past 3*floor(N/3) are discarded. Freezing is declared
/// only when the wearer was walking (cadence above threshold), the last
/// third is still on both sensors, and its variance collapsed relative to
/// the first third.
pub struct FogDiscriminator {
    cadence_min: f32,
    freeze_var_max: f32,
    freeze_drop: f32,
    intensity_var: f32,
}

impl FogDiscriminator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            cadence_min: config.cadence_min,
            freeze_var_max: config.freeze_var_max,
            freeze_drop: config.freeze_drop,
            intensity_var: config.fog_intensity_var,
        }
    }

    /// Evaluate one window given the raw accelerometer magnitude series,
    /// the gyroscope magnitude series, and the cadence of the same window.
    pub fn evaluate(
        &self,
        accel_magnitude: &[f32],
        gyro_magnitude: &[f32],
        cadence: f32,
    ) -> FogVerdict {
        debug_assert_eq!(accel_magnitude.len(), gyro_magnitude.len());

        let n = accel_magnitude.len();
        let third = n / 3;
        if third == 0 {
            return FogVerdict {
                detected: false,
                intensity: self.intensity(accel_magnitude),
            };
        }

        let walk_var = variance(&accel_magnitude[..third]);
        let freeze_var = variance(&accel_magnitude[2 * third..3 * third]);
        let gyro_freeze_var = variance(&gyro_magnitude[2 * third..3 * third]);

        let was_walking = cadence > self.cadence_min;
        let is_frozen = freeze_var < self.freeze_var_max && gyro_freeze_var < self.freeze_var_max;
        let sudden_stop = freeze_var < self.freeze_drop * walk_var;

        FogVerdict {
            detected: was_walking && is_frozen && sudden_stop,
            intensity: self.intensity(accel_magnitude),
        }
    }

    /// Stillness score from the accelerometer-magnitude variance of the
    /// last half of the window: 1 at total stillness, 0 once the variance
    /// reaches the intensity scale.
    fn intensity(&self, accel_magnitude: &[f32]) -> f32 {
        let half = &accel_magnitude[accel_magnitude.len() / 2..];
        let late_var = variance(half);
        ((self.intensity_var - late_var) / self.intensity_var).clamp(0.0, 1.0)
    }
}
