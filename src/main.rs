//! Runs the dynamic vs static dispatch demonstration.
//!
//! Standard output carries the four result lines and nothing else;
//! diagnostics go to standard error.

use std::io;

use op_dispatch::{demo, DispatchError};
use tracing::Level;

fn main() -> Result<(), DispatchError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out)
}
