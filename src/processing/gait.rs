// src/processing/gait.rs
//! Step detection and cadence estimation from accelerometer magnitude

use crate::config::AnalysisConfig;
use crate::processing::stats::{mean, std_dev};

/// Cadence estimator over one analysis window.
///
/// The cadence scalar is overwritten on every window immediately before the
/// FOG evaluation; there is no cross-window gait memory.
pub struct GaitAnalyzer {
    sample_rate_hz: f32,
    step_k: f32,
    cadence: f32,
}

impl GaitAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            sample_rate_hz: config.sample_rate_hz as f32,
            step_k: config.step_k,
            cadence: 0.0,
        }
    }

    /// Update and return the cadence (steps/s) for one window of raw
    /// accelerometer magnitude.
    pub fn analyze(&mut self, magnitude: &[f32]) -> f32 {
        let steps = self.count_steps(magnitude);
        let window_seconds = magnitude.len() as f32 / self.sample_rate_hz;
        self.cadence = if window_seconds > 0.0 {
            steps as f32 / window_seconds
        } else {
            0.0
        };
        self.cadence
    }

    /// Last computed cadence, steps per second. Always >= 0.
    pub fn cadence(&self) -> f32 {
        self.cadence
    }

    /// Count step peaks: strict local maxima above `mean + step_k * stddev`
    /// reached by an upward threshold crossing. No refractory interval is
    /// enforced between accepted peaks.
    fn count_steps(&self, magnitude: &[f32]) -> usize {
        if magnitude.len() < 3 {
            return 0;
        }

        let threshold = mean(magnitude) + self.step_k * std_dev(magnitude);

        let mut steps = 0;
        for i in 1..magnitude.len() - 1 {
            if magnitude[i] > threshold
                && magnitude[i] > magnitude[i - 1]
                && magnitude[i] > magnitude[i + 1]
                && magnitude[i - 1] <= threshold
            {
                steps += 1;
            }
        }
        steps
    }
}
