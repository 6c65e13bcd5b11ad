// src/hal/types.rs
//! Core types for IMU device abstraction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single IMU sample with metadata.
///
/// Acceleration is in g, angular velocity in deg/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuSample {
    /// Timestamp in nanoseconds since Unix epoch
    pub timestamp: u64,
    /// Sequence number for ordering samples
    pub sequence: u32,
    pub accel_x: f32,
    pub accel_y: f32,
    pub accel_z: f32,
    pub gyro_x: f32,
    pub gyro_y: f32,
    pub gyro_z: f32,
}

impl ImuSample {
    pub fn accel(&self) -> [f32; 3] {
        [self.accel_x, self.accel_y, self.accel_z]
    }

    pub fn gyro(&self) -> [f32; 3] {
        [self.gyro_x, self.gyro_y, self.gyro_z]
    }

    /// True when every channel holds a finite value.
    pub fn is_finite(&self) -> bool {
        self.accel().iter().chain(self.gyro().iter()).all(|v| v.is_finite())
    }
}

/// Device information reported by a sample source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub version: String,
    pub serial_number: String,
}

/// Synthetic waveform selector for the simulator and CLI harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Quiet wearer: gravity plus sensor noise
    Normal,
    /// 4 Hz oscillation on the horizontal axes
    Tremor,
    /// 6 Hz oscillation on the horizontal axes
    Dyskinesia,
    /// Walking with heel strikes, then sudden stillness
    Freezing,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Scenario::Normal),
            "tremor" => Ok(Scenario::Tremor),
            "dyskinesia" => Ok(Scenario::Dyskinesia),
            "fog" | "freezing" => Ok(Scenario::Freezing),
            other => Err(format!(
                "unknown scenario '{}' (expected normal, tremor, dyskinesia or fog)",
                other
            )),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Normal => "normal",
            Scenario::Tremor => "tremor",
            Scenario::Dyskinesia => "dyskinesia",
            Scenario::Freezing => "fog",
        };
        write!(f, "{}", name)
    }
}
