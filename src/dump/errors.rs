/// Errors from the dump layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ExitStatus;

/// Everything that can go wrong while dumping one path.
///
/// The `Display` text is what gets printed to stdout in place of the
/// file's content, so it names the OS error first and the path last.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The path could not be opened (missing, permission denied, ...).
    #[error("{source}: '{}'", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        source: io::Error,
    },

    /// The opened handle could not be stat'ed.
    #[error("{source}: '{}'", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    /// Reading failed partway through the file.
    #[error("{source}: '{}'", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing to or flushing the output failed.
    #[error("{source}: '<stdout>'")]
    Write {
        #[from]
        source: io::Error,
    },

    /// A directory found inside an expanded directory. Only one level is expanded.
    #[error("Is a directory: '{}'", path.display())]
    NestedDirectory {
        /// The nested directory.
        path: PathBuf,
    },

    /// A directory could not be listed, or one of its entries could not be read.
    #[error("{source}: '{}'", path.display())]
    ListDirectory { path: PathBuf, source: io::Error },
}

impl DumpError {
    /// Return the status this error contributes to the run.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Open { .. }
            | Self::Metadata { .. }
            | Self::Read { .. }
            | Self::Write { .. }
            | Self::NestedDirectory { .. }
            | Self::ListDirectory { .. } => 1,
        }
    }
}

impl From<&DumpError> for ExitStatus {
    fn from(err: &DumpError) -> Self {
        ExitStatus::from_code(err.exit_code())
    }
}
