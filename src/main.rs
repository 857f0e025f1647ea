use std::io;

use anyhow::{Context, Result};

use parsedate::{logger, parse};

fn main() -> Result<()> {
    logger::init().context("failed to install logger")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    parse::convert(stdin.lock(), stdout.lock())?;

    Ok(())
}
