use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// File records are written to; stderr is owned by the terminal interface.
pub const LOG_FILE: &str = "doppler.log";

/// Initializes the logger when `RUST_LOG` is set.
pub fn init() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    env_logger::Builder::from_env(Env::default())
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}
