// src/hal/mod.rs
//! Hardware abstraction layer: sample sources and result sinks
//!
//! The core consumes samples through the `ImuDevice` trait and publishes
//! results through `ResultSink`; register-level drivers and the real BLE
//! stack live outside this crate.

pub mod simulator;
pub mod sink;
pub mod traits;
pub mod types;

pub use simulator::{SimulatorConfig, SimulatorDevice};
pub use sink::{ConsoleSink, JsonLinesSink, MemorySink, TransportFrame};
pub use traits::{ImuDevice, ResultSink};
pub use types::{DeviceInfo, ImuSample, Scenario};
