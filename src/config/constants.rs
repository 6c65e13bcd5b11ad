// src/config/constants.rs
//! System-wide configuration constants

/// Signal acquisition constants
pub mod signal {
    /// IMU sample rate in Hz
    pub const SAMPLE_RATE_HZ: u32 = 52;

    /// Samples per analysis window (3 s at 52 Hz)
    pub const WINDOW_LEN: usize = 156;

    /// Minimum window length accepted at configuration time
    pub const MIN_WINDOW_LEN: usize = 6;

    /// Minimum sample rate accepted at configuration time
    pub const MIN_SAMPLE_RATE_HZ: u32 = 1;

    pub const NANOSECONDS_PER_SECOND: u64 = 1_000_000_000;
}

/// Symptom detection constants
pub mod detection {
    /// Tremor band in Hz
    pub const TREMOR_BAND_HZ: (f32, f32) = (3.0, 5.0);

    /// Dyskinesia band in Hz
    pub const DYSKINESIA_BAND_HZ: (f32, f32) = (5.0, 7.0);

    /// Reference background band in Hz
    pub const BACKGROUND_BAND_HZ: (f32, f32) = (0.0, 2.0);

    /// Minimum band intensity for a positive detection
    pub const DETECT_THRESHOLD: f32 = 0.25;

    /// Band intensity must exceed background intensity times this ratio
    pub const BACKGROUND_RATIO: f32 = 1.2;

    /// Minimum prior cadence (steps/s) to consider freezing of gait
    pub const CADENCE_MIN: f32 = 0.3;

    /// Variance ceiling for a segment to count as frozen
    pub const FREEZE_VAR_MAX: f32 = 0.01;

    /// Last/first segment variance ratio ceiling for a sudden stop
    pub const FREEZE_DROP: f32 = 0.5;

    /// Variance scale for the FOG intensity mapping
    pub const FOG_INTENSITY_VAR: f32 = 0.005;

    /// Step threshold = mean + STEP_K * stddev of the magnitude series
    pub const STEP_K: f32 = 0.5;

    /// Peak weight in the combined band energy
    pub const BAND_PEAK_WEIGHT: f32 = 0.8;

    /// Mean weight in the combined band energy
    pub const BAND_AVG_WEIGHT: f32 = 0.2;

    /// Divisor clamping band intensity into [0, 1]
    pub const BAND_NORM: f32 = 1.2;
}

/// Simulator constants
pub mod simulation {
    /// Tremor scenario: 4 Hz oscillation, 0.2 g amplitude
    pub const TREMOR_FREQ_HZ: f32 = 4.0;
    pub const TREMOR_AMPLITUDE_G: f32 = 0.2;

    /// Dyskinesia scenario: 6 Hz oscillation, 0.3 g amplitude
    pub const DYSKINESIA_FREQ_HZ: f32 = 6.0;
    pub const DYSKINESIA_AMPLITUDE_G: f32 = 0.3;

    /// Walking sway during the FOG scenario: 2 Hz, 0.1 g
    pub const WALK_SWAY_FREQ_HZ: f32 = 2.0;
    pub const WALK_SWAY_AMPLITUDE_G: f32 = 0.1;

    /// Heel-strike impulse during the FOG scenario, added to the z axis
    pub const HEEL_STRIKE_AMPLITUDE_G: f32 = 0.5;

    /// Samples between heel strikes (2 steps/s at 52 Hz)
    pub const HEEL_STRIKE_PERIOD_SAMPLES: u64 = 26;

    /// Residual accelerometer level while frozen
    pub const FREEZE_RESIDUAL_G: f32 = 0.01;

    pub const DEFAULT_NOISE_LEVEL: f32 = 0.005;
    pub const MAX_NOISE_LEVEL: f32 = 0.5;

    /// Gravity baseline on the z axis in g
    pub const GRAVITY_G: f32 = 1.0;
}

/// Result transport constants
pub mod transport {
    /// Intensity quantization scale for one-byte characteristics
    pub const INTENSITY_SCALE: f32 = 255.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_matches_sample_rate() {
        // 3 seconds of samples
        assert_eq!(signal::WINDOW_LEN, 3 * signal::SAMPLE_RATE_HZ as usize);
        assert!(signal::WINDOW_LEN >= signal::MIN_WINDOW_LEN);
    }

    #[test]
    fn test_bands_are_ordered_and_disjoint_from_background() {
        assert!(detection::TREMOR_BAND_HZ.0 < detection::TREMOR_BAND_HZ.1);
        assert!(detection::DYSKINESIA_BAND_HZ.0 < detection::DYSKINESIA_BAND_HZ.1);
        assert!(detection::BACKGROUND_BAND_HZ.1 <= detection::TREMOR_BAND_HZ.0);
        assert!(detection::TREMOR_BAND_HZ.1 <= detection::DYSKINESIA_BAND_HZ.0);
    }

    #[test]
    fn test_band_weights_sum_to_one() {
        let sum = detection::BAND_PEAK_WEIGHT + detection::BAND_AVG_WEIGHT;
        assert!((sum - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_detection_thresholds_in_range() {
        assert!(detection::DETECT_THRESHOLD > 0.0 && detection::DETECT_THRESHOLD < 1.0);
        assert!(detection::BACKGROUND_RATIO >= 1.0);
        assert!(detection::FREEZE_DROP > 0.0 && detection::FREEZE_DROP < 1.0);
        assert!(detection::BAND_NORM > 0.0);
    }
}
