// src/hal/traits.rs
//! Core HAL traits for sample sources and result sinks

use crate::error::MotionError;
use crate::hal::types::{DeviceInfo, ImuSample};
use crate::processing::SymptomResult;
use std::error::Error;

/// Sample source abstraction.
///
/// Implementations must deliver samples at approximately their advertised
/// rate; drift within ±5 % is tolerated by the analysis.
pub trait ImuDevice: Send {
    type Error: Error + Send + Sync + 'static;

    /// Initialize the device. Failure here is fatal to the run.
    async fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Start sample delivery
    async fn start_streaming(&mut self) -> Result<(), Self::Error>;

    /// Stop sample delivery
    async fn stop_streaming(&mut self) -> Result<(), Self::Error>;

    /// Read the next sample
    async fn read_sample(&mut self) -> Result<ImuSample, Self::Error>;

    /// Get device information
    fn device_info(&self) -> DeviceInfo;

    /// Get the sample rate in Hz
    fn sample_rate_hz(&self) -> u32;
}

/// Result sink abstraction.
///
/// Publication is best-effort: `publish` never blocks the analysis loop and
/// a failed sink must degrade to dropping records, not to stalling.
pub trait ResultSink: Send {
    /// Prepare the sink. Failure is non-fatal; the runner logs and proceeds.
    fn init(&mut self) -> Result<(), MotionError>;

    /// Publish one per-window result
    fn publish(&mut self, result: &SymptomResult);
}
