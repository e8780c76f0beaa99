#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! sysfs-dump — cat files with a path header, expanding directories one level deep.

mod cli;
mod commands;
mod dump;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx};

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.terminator());

    let stdout = std::io::stdout();
    let status = commands::dump::run(&cli.paths, &ctx, stdout.lock());
    if !status.is_success() {
        std::process::exit(status.code());
    }
}
