//! Replay a scripted input sequence against a scene and print the result.

use clap::Parser;
use freeform_replay::{ReplayResult, run_files};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "freeform-replay", about = "Replay scripted canvas input against a scene")]
struct Cli {
    /// Scene file: container size, optional config and initial elements.
    scene: PathBuf,
    /// Script file: a JSON array of input steps.
    script: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("freeform-replay: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ReplayResult<()> {
    let replay = run_files(&cli.scene, &cli.script)?;
    log::info!(
        "{} steps handled, {} changes committed",
        replay.handled,
        replay.changes
    );
    println!("{}", serde_json::to_string_pretty(&replay.elements)?);
    Ok(())
}
