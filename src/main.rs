use std::io;

use anyhow::Result;
use bitesize_uci::UciEngine;
use tracing::info;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("bitesize starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    UciEngine::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
