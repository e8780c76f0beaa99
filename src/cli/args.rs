/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

use crate::types::Terminator;

/// sysfs-dump — print files with a path header, expanding directories one level.
#[derive(Debug, Parser)]
#[command(
    name = "sysfs-dump",
    about = "Print the passed in files on standard output",
    version
)]
pub struct Cli {
    /// Print a newline after printing each path.
    #[arg(short = 'n')]
    pub newlines: bool,

    /// Paths to print. Directories are expanded into their immediate entries.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// The terminator selected by `-n`.
    #[must_use]
    pub fn terminator(&self) -> Terminator {
        Terminator::from_flag(self.newlines)
    }
}
