//! Stride Engine
//!
//! Diagnostic CLI for the step-counting pipeline: reads a wire-format
//! accelerometer run from a file and prints the structured report as
//! JSON. For library use, see lib.rs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use stride_engine::export::RunReport;
use stride_engine::pipeline::PipelineRun;
use stride_engine::profile::UserProfile;

#[derive(Parser, Debug)]
#[command(name = "stride-engine")]
#[command(version, about = "Batch step counting over a wire-format accelerometer run")]
struct Cli {
    /// Path to the wire-format data file
    data_file: PathBuf,

    /// Wearer gender (male or female)
    #[arg(long)]
    gender: Option<String>,

    /// Wearer height, in the same unit as stride and distance
    #[arg(long)]
    height: Option<f64>,

    /// Explicit stride length; overrides derivation from gender/height
    #[arg(long)]
    stride: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let raw = match std::fs::read_to_string(&cli.data_file) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("cannot read {}: {}", cli.data_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let profile = match UserProfile::new(cli.gender.as_deref(), cli.height, cli.stride) {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let run = match PipelineRun::from_raw(&raw, profile) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match RunReport::from_run(&run).to_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("report serialization failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
