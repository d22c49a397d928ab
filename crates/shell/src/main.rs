use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use benchstock_shell::Shell;

use crate::opts::Opts;

mod opts;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    benchstock_observability::init(opts.log_format.into());
    debug!(?opts, "starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    shell.run().context("interactive session failed")?;
    Ok(())
}
