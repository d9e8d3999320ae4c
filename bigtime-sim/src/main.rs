//! Big Time watch face simulator
//!
//! Runs the watch face against in-memory collaborators and prints the
//! screen after every scripted event.
//!
//! Usage: `bigtime-sim [config.toml]`; set `RUST_LOG=debug` for the core's
//! log output.

mod config;
mod error;
mod frame;
mod runner;
mod scenario;

use std::path::PathBuf;
use std::process::ExitCode;

use config::SimConfig;
use error::SimError;
use runner::Simulator;
use scenario::parse_steps;

fn run(path: Option<PathBuf>) -> Result<(), SimError> {
    let config = SimConfig::load(path.as_deref())?;
    let steps = parse_steps(&config.scenario.steps)?;

    let mut sim = Simulator::new(config)?;
    sim.start()?;
    println!("start");
    print!("{}", sim.frame());

    for (n, step) in steps.into_iter().enumerate() {
        sim.step(step);
        println!("\nstep {}: {:?}", n + 1, step);
        print!("{}", sim.frame());
    }

    let balance = sim.finish();
    println!("\n{}", balance);
    if balance.is_clean() {
        Ok(())
    } else {
        Err(SimError::Leaked {
            live: balance.live,
            orphaned: balance.orphaned_layers,
            unknown: balance.unknown_releases,
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    match run(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
