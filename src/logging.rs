// src/logging.rs
use std::io::IsTerminal;
use tracing::Level;

/// Installs the stderr fmt subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .ok();
}
