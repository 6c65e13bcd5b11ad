// src/runner.rs
//! Acquisition loop: read, window, analyze, publish
//!
//! Single-threaded cooperative loop. Only the sample read and the optional
//! inter-sample pacing suspend; one window's analysis runs to completion
//! before the next read.

use crate::config::AnalysisConfig;
use crate::error::MotionError;
use crate::hal::traits::{ImuDevice, ResultSink};
use crate::processing::{SampleWindow, SymptomPipeline};
use std::time::Duration;

/// Consecutive read failures tolerated before a run aborts
const MAX_CONSECUTIVE_READ_FAILURES: u32 = 5;

/// Run controls
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Stop after this many analyzed windows; `None` runs until the source
    /// fails
    pub max_windows: Option<u64>,
    /// Pace reads at the sample period instead of free-running
    pub realtime: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_windows: None,
            realtime: false,
        }
    }
}

/// Totals reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub samples_read: u64,
    pub windows_analyzed: u64,
    pub read_failures: u64,
}

/// Owns the window buffer and pipeline, and drives one device/sink pair.
pub struct AnalysisRunner<D: ImuDevice, S: ResultSink> {
    device: D,
    sink: S,
    window: SampleWindow,
    pipeline: SymptomPipeline,
    runner_config: RunnerConfig,
    sample_period: Duration,
}

impl<D: ImuDevice, S: ResultSink> AnalysisRunner<D, S> {
    pub fn new(
        device: D,
        sink: S,
        analysis_config: AnalysisConfig,
        runner_config: RunnerConfig,
    ) -> Result<Self, MotionError> {
        let window = SampleWindow::new(analysis_config.window_len);
        let sample_period = Duration::from_nanos(analysis_config.sample_period_nanos());
        let pipeline = SymptomPipeline::new(analysis_config)?;

        Ok(Self {
            device,
            sink,
            window,
            pipeline,
            runner_config,
            sample_period,
        })
    }

    /// Run until the window quota is met or the source gives up.
    ///
    /// Source initialization failure is fatal; sink initialization failure
    /// is logged and the run proceeds (publication stays best-effort).
    pub async fn run(&mut self) -> Result<RunStats, MotionError> {
        self.device
            .initialize()
            .await
            .map_err(|e| MotionError::Device(Box::new(e)))?;
        self.device
            .start_streaming()
            .await
            .map_err(|e| MotionError::Device(Box::new(e)))?;

        let info = self.device.device_info();
        log::info!(
            "acquisition started: {} (serial {}) at {} Hz",
            info.name,
            info.serial_number,
            self.device.sample_rate_hz()
        );

        if let Err(e) = self.sink.init() {
            log::warn!("sink initialization failed, results are best-effort: {}", e);
        }

        let mut stats = RunStats::default();
        let mut consecutive_failures = 0u32;
        let mut ticker = if self.runner_config.realtime {
            Some(tokio::time::interval(self.sample_period))
        } else {
            None
        };

        loop {
            if let Some(ticker) = ticker.as_mut() {
                ticker.tick().await;
            }

            let sample = match self.device.read_sample().await {
                Ok(sample) => {
                    consecutive_failures = 0;
                    sample
                }
                Err(e) => {
                    stats.read_failures += 1;
                    consecutive_failures += 1;
                    if consecutive_failures >= MAX_CONSECUTIVE_READ_FAILURES {
                        self.stop().await;
                        return Err(MotionError::Device(Box::new(e)));
                    }
                    log::warn!("sample read failed ({}), retrying", e);
                    continue;
                }
            };
            stats.samples_read += 1;

            if self.window.push(&sample) {
                if let Some(view) = self.window.view() {
                    let result = self.pipeline.analyze(&view);

                    stats.windows_analyzed += 1;
                    log::debug!(
                        "window {}: tremor {:.2}/{} dyskinesia {:.2}/{} fog {:.2}/{}",
                        stats.windows_analyzed,
                        result.tremor_intensity,
                        result.tremor_detected,
                        result.dyskinesia_intensity,
                        result.dyskinesia_detected,
                        result.fog_intensity,
                        result.fog_detected,
                    );
                    self.sink.publish(&result);
                }
                self.window.reset();

                if let Some(max) = self.runner_config.max_windows {
                    if stats.windows_analyzed >= max {
                        break;
                    }
                }
            }
        }

        self.stop().await;
        log::info!(
            "acquisition finished: {} samples, {} windows",
            stats.samples_read,
            stats.windows_analyzed
        );
        Ok(stats)
    }

    async fn stop(&mut self) {
        if let Err(e) = self.device.stop_streaming().await {
            log::warn!("failed to stop streaming: {}", e);
        }
    }

    /// Hand the sink back, e.g. to inspect captured results after a run.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
