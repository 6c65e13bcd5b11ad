// src/hal/simulator.rs
//! IMU simulator producing deterministic symptom waveforms
//!
//! The simulator stands in for the wearable's LSM6-class sensor during
//! development and testing. Each scenario synthesizes the motion signature
//! of one motor phenomenon; sensor noise is seedable for reproducibility.

use crate::config::constants::signal::NANOSECONDS_PER_SECOND;
use crate::config::constants::simulation::*;
use crate::hal::traits::ImuDevice;
use crate::hal::types::{DeviceInfo, ImuSample, Scenario};
use crate::utils::time::{SystemTimeProvider, TimeProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::f32::consts::PI;
use std::sync::Arc;

/// Configuration for the IMU simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub scenario: Scenario,
    pub sample_rate_hz: u32,
    /// Uniform noise amplitude added to every accelerometer axis, in g
    pub noise_level: f32,
    /// Fixed RNG seed; `None` draws entropy from the OS
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::Normal,
            sample_rate_hz: crate::config::constants::signal::SAMPLE_RATE_HZ,
            noise_level: DEFAULT_NOISE_LEVEL,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    ConfigurationError(String),
    DeviceNotRunning,
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            SimulatorError::DeviceNotRunning => write!(f, "Device not running"),
        }
    }
}

impl Error for SimulatorError {}

/// Simulated IMU device
pub struct SimulatorDevice {
    config: SimulatorConfig,
    rng: StdRng,
    running: bool,
    tick: u64,
    base_timestamp: u64,
    sample_period_nanos: u64,
    /// Samples per 3-second scenario cycle; the FOG scenario walks for the
    /// first half of each cycle and freezes for the second
    cycle_len: u64,
    time_provider: Arc<dyn TimeProvider>,
}

impl SimulatorDevice {
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        Self::with_time_provider(config, Arc::new(SystemTimeProvider))
    }

    /// Create a simulator with a custom time provider (for testing)
    pub fn with_time_provider(
        config: SimulatorConfig,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Result<Self, SimulatorError> {
        if config.sample_rate_hz == 0 {
            return Err(SimulatorError::ConfigurationError(
                "sample rate must be positive".to_string(),
            ));
        }
        if !(0.0..=MAX_NOISE_LEVEL).contains(&config.noise_level) {
            return Err(SimulatorError::ConfigurationError(format!(
                "noise level {} outside [0, {}]",
                config.noise_level, MAX_NOISE_LEVEL
            )));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sample_period_nanos = NANOSECONDS_PER_SECOND / config.sample_rate_hz as u64;
        let cycle_len = 3 * config.sample_rate_hz as u64;

        Ok(Self {
            config,
            rng,
            running: false,
            tick: 0,
            base_timestamp: 0,
            sample_period_nanos,
            cycle_len,
            time_provider,
        })
    }

    /// Convenience constructor for one scenario with a fixed seed
    pub fn scenario(scenario: Scenario, seed: u64) -> Result<Self, SimulatorError> {
        Self::new(SimulatorConfig {
            scenario,
            seed: Some(seed),
            ..SimulatorConfig::default()
        })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    fn noise(&mut self) -> f32 {
        if self.config.noise_level == 0.0 {
            0.0
        } else {
            let level = self.config.noise_level;
            self.rng.gen_range(-level..level)
        }
    }

    /// Synthesize the accelerometer signature of the configured scenario at
    /// sample index `tick`. Gyro channels stay at the noise floor: the
    /// modeled phenomena are dominated by linear acceleration.
    fn generate(&mut self, tick: u64) -> (f32, f32, f32, f32, f32, f32) {
        let t = tick as f32 / self.config.sample_rate_hz as f32;

        let (ax, ay, az) = match self.config.scenario {
            Scenario::Normal => (0.0, 0.0, GRAVITY_G),
            Scenario::Tremor => {
                let phase = 2.0 * PI * TREMOR_FREQ_HZ * t;
                (
                    TREMOR_AMPLITUDE_G * phase.sin(),
                    TREMOR_AMPLITUDE_G * (phase + PI / 4.0).sin(),
                    GRAVITY_G,
                )
            }
            Scenario::Dyskinesia => {
                let phase = 2.0 * PI * DYSKINESIA_FREQ_HZ * t;
                (
                    DYSKINESIA_AMPLITUDE_G * phase.sin(),
                    DYSKINESIA_AMPLITUDE_G * (phase + PI / 3.0).sin(),
                    GRAVITY_G,
                )
            }
            Scenario::Freezing => {
                let in_cycle = tick % self.cycle_len;
                if in_cycle < self.cycle_len / 2 {
                    // walking: lateral sway plus a heel-strike impulse
                    let phase = 2.0 * PI * WALK_SWAY_FREQ_HZ * t;
                    let strike = if in_cycle % HEEL_STRIKE_PERIOD_SAMPLES == 0 {
                        HEEL_STRIKE_AMPLITUDE_G
                    } else {
                        0.0
                    };
                    (
                        WALK_SWAY_AMPLITUDE_G * phase.sin(),
                        WALK_SWAY_AMPLITUDE_G * (phase + PI / 4.0).sin(),
                        GRAVITY_G + strike,
                    )
                } else {
                    // frozen: residual micro-motion over gravity
                    (FREEZE_RESIDUAL_G, FREEZE_RESIDUAL_G, GRAVITY_G)
                }
            }
        };

        let (nx, ny, nz) = (self.noise(), self.noise(), self.noise());
        (ax + nx, ay + ny, az + nz, self.noise(), self.noise(), self.noise())
    }
}

impl ImuDevice for SimulatorDevice {
    type Error = SimulatorError;

    async fn initialize(&mut self) -> Result<(), Self::Error> {
        self.tick = 0;
        self.base_timestamp = self.time_provider.now_nanos();
        Ok(())
    }

    async fn start_streaming(&mut self) -> Result<(), Self::Error> {
        self.tick = 0;
        self.base_timestamp = self.time_provider.now_nanos();
        self.running = true;
        Ok(())
    }

    async fn stop_streaming(&mut self) -> Result<(), Self::Error> {
        self.running = false;
        Ok(())
    }

    async fn read_sample(&mut self) -> Result<ImuSample, Self::Error> {
        if !self.running {
            return Err(SimulatorError::DeviceNotRunning);
        }

        let tick = self.tick;
        self.tick += 1;

        let (accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z) = self.generate(tick);

        Ok(ImuSample {
            timestamp: self.base_timestamp + tick * self.sample_period_nanos,
            sequence: tick as u32,
            accel_x,
            accel_y,
            accel_z,
            gyro_x,
            gyro_y,
            gyro_z,
        })
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            name: "IMU Simulator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            serial_number: format!("SIM-{}", self.config.scenario),
        }
    }

    fn sample_rate_hz(&self) -> u32 {
        self.config.sample_rate_hz
    }
}
