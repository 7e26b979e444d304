use std::fs;

use clap::Parser;
use paper::{error::ArgumentError, interpreter::run_mode::RunMode, run_source};

/// paper runs scripts written in Paper, a small line-oriented scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How much intermediate state to show: 0 (normal), 1 (verbose, token
    /// kinds), 2 (debug, environment at the end) or 3 (step-through debug,
    /// environment before every token).
    #[arg(short, long, default_value_t = RunMode::Normal)]
    mode: RunMode,

    /// Path to the script to run.
    file: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|e| {
                                                   let error = ArgumentError::UnreadableFile { path:    args.file.clone(),
                                                                                               details: e.to_string(), };
                                                   eprintln!("{error}");
                                                   std::process::exit(2);
                                               });

    if let Err(e) = run_source(&script, args.mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
