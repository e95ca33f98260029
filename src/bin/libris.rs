//! Libris Console Binary
//!
//! Runs the interactive library menu on stdin/stdout.

use std::io;

use clap::Parser;
use libris::console::Session;
use libris::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// Libris
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Interactive in-memory library catalog")]
#[command(version)]
struct Args {
    /// Maximum number of books the catalog can hold
    #[arg(short, long, default_value = "10")]
    capacity: usize,

    /// Do not wait for Enter after each operation
    #[arg(long)]
    no_pause: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Libris v{}", libris::VERSION);

    let config = Config::builder()
        .max_capacity(args.capacity)
        .pause_after_operation(!args.no_pause)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        eprintln!("{e}");
        std::process::exit(2);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
