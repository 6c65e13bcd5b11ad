// src/processing/band_energy.rs
//! Frequency-band energy estimation over FFT magnitudes

use crate::config::AnalysisConfig;
use crate::processing::fft::FftEngine;

/// Maps one-axis sequences to a normalized [0, 1] intensity summarizing
/// spectral energy inside a frequency band.
pub struct BandEnergyEstimator {
    fft: FftEngine,
    sample_rate_hz: f32,
    peak_weight: f32,
    avg_weight: f32,
    norm: f32,
}

impl BandEnergyEstimator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            fft: FftEngine::with_plan(config.window_len),
            sample_rate_hz: config.sample_rate_hz as f32,
            peak_weight: config.band_peak_weight,
            avg_weight: config.band_avg_weight,
            norm: config.band_norm,
        }
    }

    /// Band intensity of a single axis.
    ///
    /// Bin k of an N-point input is taken at frequency k·rate/N; bins in
    /// [0, N/2) whose frequency falls inside the inclusive band contribute.
    /// An empty band scores 0.
    pub fn single_axis(&mut self, samples: &[f32], band_hz: (f32, f32)) -> f32 {
        let n = samples.len();
        if n == 0 {
            return 0.0;
        }

        let spectrum = self.fft.forward(samples);

        let mut peak = 0.0f32;
        let mut total = 0.0f32;
        let mut count = 0usize;
        for (k, bin) in spectrum.iter().enumerate().take(n / 2) {
            let freq = k as f32 * self.sample_rate_hz / n as f32;
            if freq >= band_hz.0 && freq <= band_hz.1 {
                let magnitude = bin.norm();
                peak = peak.max(magnitude);
                total += magnitude;
                count += 1;
            }
        }
        if count == 0 {
            return 0.0;
        }

        let combined = self.peak_weight * peak + self.avg_weight * (total / count as f32);
        (combined / self.norm).min(1.0)
    }

    /// Three-axis aggregate: the per-axis maximum, so a symptom confined to
    /// one direction still scores.
    pub fn three_axis(&mut self, x: &[f32], y: &[f32], z: &[f32], band_hz: (f32, f32)) -> f32 {
        self.single_axis(x, band_hz)
            .max(self.single_axis(y, band_hz))
            .max(self.single_axis(z, band_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn estimator() -> BandEnergyEstimator {
        BandEnergyEstimator::new(&AnalysisConfig::default())
    }

    fn tone(freq_hz: f32, amplitude: f32, phase: f32) -> Vec<f32> {
        (0..156)
            .map(|i| amplitude * (2.0 * PI * freq_hz * i as f32 / 52.0 + phase).sin())
            .collect()
    }

    #[test]
    fn test_in_band_tone_scores() {
        let mut est = estimator();
        // 4 Hz is 12 exact cycles over the window, all energy in bin 12
        let intensity = est.single_axis(&tone(4.0, 0.2, 0.0), (3.0, 5.0));
        assert!(intensity > 0.9, "got {}", intensity);
    }

    #[test]
    fn test_out_of_band_tone_scores_zero_ish() {
        let mut est = estimator();
        let intensity = est.single_axis(&tone(4.0, 0.2, 0.0), (5.0, 7.0));
        assert!(intensity < 0.05, "got {}", intensity);
    }

    #[test]
    fn test_empty_band_returns_zero() {
        let mut est = estimator();
        // beyond the highest consulted bin (77 * 52 / 156 < 26 Hz)
        assert_eq!(est.single_axis(&tone(4.0, 0.2, 0.0), (30.0, 40.0)), 0.0);
    }

    #[test]
    fn test_zero_signal_scores_zero() {
        let mut est = estimator();
        assert_eq!(est.single_axis(&[0.0; 156], (3.0, 5.0)), 0.0);
    }

    #[test]
    fn test_intensity_scales_linearly_until_saturation() {
        let mut est = estimator();
        let low = est.single_axis(&tone(4.0, 0.002, 0.0), (3.0, 5.0));
        let high = est.single_axis(&tone(4.0, 0.004, 0.0), (3.0, 5.0));
        assert!(low > 0.05 && low < 1.0);
        assert!((high / low - 2.0).abs() < 0.05, "low {} high {}", low, high);

        let saturated = est.single_axis(&tone(4.0, 0.5, 0.0), (3.0, 5.0));
        assert_eq!(saturated, 1.0);
    }

    #[test]
    fn test_three_axis_takes_worst_axis() {
        let mut est = estimator();
        let active = tone(4.0, 0.2, 0.0);
        let quiet = vec![0.0f32; 156];
        let single = est.single_axis(&active, (3.0, 5.0));
        let aggregate = est.three_axis(&quiet, &quiet, &active, (3.0, 5.0));
        assert!((aggregate - single).abs() < 1e-6);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let mut est = estimator();
        // 5 Hz sits exactly on the tremor/dyskinesia boundary bin (k = 15)
        let boundary = tone(5.0, 0.2, 0.0);
        let tremor = est.single_axis(&boundary, (3.0, 5.0));
        let dysk = est.single_axis(&boundary, (5.0, 7.0));
        assert!(tremor > 0.9);
        assert!(dysk > 0.9);
    }
}
