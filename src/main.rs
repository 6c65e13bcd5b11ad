// src/main.rs
//! Simulation harness for the motion-symptom analyzer

use clap::Parser;
use pd_motion_core::hal::{ConsoleSink, JsonLinesSink};
use pd_motion_core::{
    AnalysisConfig, AnalysisRunner, MotionError, RunnerConfig, Scenario, SimulatorConfig,
    SimulatorDevice,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pd-motion-core", version, about = "Parkinsonian motion-symptom simulation harness")]
struct Args {
    /// Synthetic scenario: normal, tremor, dyskinesia or fog
    #[arg(long, default_value = "normal")]
    scenario: String,

    /// Number of 3-second windows to analyze
    #[arg(long, default_value_t = 5)]
    windows: u64,

    /// Pace acquisition at the real sample rate instead of free-running
    #[arg(long)]
    realtime: bool,

    /// Optional analysis configuration TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON lines instead of the human-readable report
    #[arg(long)]
    json: bool,

    /// Noise amplitude added to every accelerometer axis, in g
    #[arg(long, default_value_t = 0.005)]
    noise: f32,

    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), MotionError> {
    let scenario: Scenario = args
        .scenario
        .parse()
        .map_err(MotionError::Configuration)?;

    let analysis_config = match &args.config {
        Some(path) => AnalysisConfig::from_toml_file(path)?,
        None => AnalysisConfig::default(),
    };

    let device = SimulatorDevice::new(SimulatorConfig {
        scenario,
        sample_rate_hz: analysis_config.sample_rate_hz,
        noise_level: args.noise,
        seed: args.seed,
    })?;

    let runner_config = RunnerConfig {
        max_windows: Some(args.windows),
        realtime: args.realtime,
    };

    println!(
        "scenario '{}': analyzing {} windows of {} samples at {} Hz",
        scenario, args.windows, analysis_config.window_len, analysis_config.sample_rate_hz
    );

    let stats = if args.json {
        let sink = JsonLinesSink::new(std::io::stdout());
        AnalysisRunner::new(device, sink, analysis_config, runner_config)?
            .run()
            .await?
    } else {
        let sink = ConsoleSink::new();
        AnalysisRunner::new(device, sink, analysis_config, runner_config)?
            .run()
            .await?
    };

    println!(
        "done: {} samples read, {} windows analyzed",
        stats.samples_read, stats.windows_analyzed
    );
    Ok(())
}
