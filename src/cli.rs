use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::debug;

use crate::{diff, scanner};

/// Compare the executables reachable via two search paths.
#[derive(Debug, Parser)]
#[command(name = "diffpath")]
pub struct Cli {
    /// First colon-separated search path (PATH syntax)
    pub path1: String,
    /// Second colon-separated search path (PATH syntax)
    pub path2: String,
}

/// Scan both search paths and print the asymmetric difference to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let left = scanner::scan_executables(&cli.path1);
    let right = scanner::scan_executables(&cli.path2);
    debug!(
        "Comparing {} executables against {}",
        left.len(),
        right.len()
    );

    let lines = diff::diff(&left, &right);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    diff::write_report(&mut out, &lines)?;
    out.flush()?;
    Ok(())
}
