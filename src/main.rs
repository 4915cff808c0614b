use std::io;
use std::path::Path;

use clap::Parser;
use filecap_lib::commands;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compiled-in target: the DBLP v12 citation dump this tool exists to cap.
const TARGET_FILE: &str = "dblp.v12.json";
/// Keep at most this many bytes of the target file.
const MAX_BYTES: u64 = 500_000;

#[derive(Parser)]
#[command(name = "filecap")]
#[command(about = "Caps the DBLP dataset dump at 500kb, in place")]
#[command(version = VERSION)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Diagnostics are opt-in via RUST_LOG and go to stderr, keeping stdout
    // reserved for the status line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = commands::cap::run(Path::new(TARGET_FILE), MAX_BYTES) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
