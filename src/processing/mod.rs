// src/processing/mod.rs
//! Signal-processing core: FFT, band energy, gait, FOG, windowing, pipeline

pub mod band_energy;
pub mod fft;
pub mod fog;
pub mod gait;
pub mod pipeline;
pub mod stats;
pub mod window;

pub use band_energy::BandEnergyEstimator;
pub use fft::FftEngine;
pub use fog::{FogDiscriminator, FogVerdict};
pub use gait::GaitAnalyzer;
pub use pipeline::{SymptomPipeline, SymptomResult};
pub use window::{SampleWindow, WindowView};
