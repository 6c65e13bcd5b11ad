// src/hal/sink.rs
//! Result sinks: console reports, JSON lines, transport framing
//!
//! Publication is best-effort by contract. A sink that loses its output
//! channel keeps accepting records and drops them; it never blocks or
//! errors the analysis loop.

use crate::config::constants::transport::INTENSITY_SCALE;
use crate::error::MotionError;
use crate::hal::traits::ResultSink;
use crate::processing::SymptomResult;
use std::io::Write;

/// Quantize an intensity in [0, 1] to one byte (truncating, ×255).
///
/// Out-of-range inputs are clamped; the core guarantees [0, 1] but the
/// transport must not wrap on a misbehaving producer.
pub fn quantize_intensity(intensity: f32) -> u8 {
    (intensity.clamp(0.0, 1.0) * INTENSITY_SCALE) as u8
}

/// Six-byte characteristic frame for a BLE-style transport: per symptom a
/// 0/1 status byte followed by a quantized intensity byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportFrame {
    pub tremor_status: u8,
    pub tremor_intensity: u8,
    pub dyskinesia_status: u8,
    pub dyskinesia_intensity: u8,
    pub fog_status: u8,
    pub fog_intensity: u8,
}

impl TransportFrame {
    pub fn from_result(result: &SymptomResult) -> Self {
        Self {
            tremor_status: result.tremor_detected as u8,
            tremor_intensity: quantize_intensity(result.tremor_intensity),
            dyskinesia_status: result.dyskinesia_detected as u8,
            dyskinesia_intensity: quantize_intensity(result.dyskinesia_intensity),
            fog_status: result.fog_detected as u8,
            fog_intensity: quantize_intensity(result.fog_intensity),
        }
    }

    pub fn to_bytes(self) -> [u8; 6] {
        [
            self.tremor_status,
            self.tremor_intensity,
            self.dyskinesia_status,
            self.dyskinesia_intensity,
            self.fog_status,
            self.fog_intensity,
        ]
    }
}

/// Human-readable per-window reports on standard output (the CLI surface)
pub struct ConsoleSink {
    window_index: u64,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { window_index: 0 }
    }

    fn format_line(name: &str, detected: bool, intensity: f32) -> String {
        format!(
            "  {:<12} {}  (intensity {:.2})",
            name,
            if detected { "DETECTED" } else { "-" },
            intensity
        )
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for ConsoleSink {
    fn init(&mut self) -> Result<(), MotionError> {
        Ok(())
    }

    fn publish(&mut self, result: &SymptomResult) {
        self.window_index += 1;
        println!("window {}", self.window_index);
        println!(
            "{}",
            Self::format_line("tremor", result.tremor_detected, result.tremor_intensity)
        );
        println!(
            "{}",
            Self::format_line(
                "dyskinesia",
                result.dyskinesia_detected,
                result.dyskinesia_intensity
            )
        );
        println!(
            "{}",
            Self::format_line("freezing", result.fog_detected, result.fog_intensity)
        );
    }
}

/// One JSON object per window to any writer; degrades to dropping records
/// when the writer fails.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
    healthy: bool,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            healthy: true,
        }
    }
}

impl<W: Write + Send> ResultSink for JsonLinesSink<W> {
    fn init(&mut self) -> Result<(), MotionError> {
        Ok(())
    }

    fn publish(&mut self, result: &SymptomResult) {
        if !self.healthy {
            return;
        }
        let line = match serde_json::to_string(result) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("dropping result, serialization failed: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(self.writer, "{}", line) {
            log::warn!("sink writer failed, discarding further results: {}", e);
            self.healthy = false;
        }
    }
}

/// Captures published results in memory; used by integration tests
#[derive(Debug, Default)]
pub struct MemorySink {
    pub results: Vec<SymptomResult>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn init(&mut self) -> Result<(), MotionError> {
        Ok(())
    }

    fn publish(&mut self, result: &SymptomResult) {
        self.results.push(result.clone());
    }
}
