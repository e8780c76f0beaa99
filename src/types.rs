/// Shared value types passed between the driver and the dumper.
use std::ops::{BitOr, BitOrAssign};
use std::path::PathBuf;

/// What follows the `<path>:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    /// Content starts right after the colon.
    #[default]
    None,
    /// A line break separates the header from the content (`-n`).
    Newline,
}

impl Terminator {
    /// Pick the terminator from the `-n` flag.
    #[must_use]
    pub fn from_flag(newlines: bool) -> Self {
        if newlines { Self::Newline } else { Self::None }
    }

    /// Bytes written after the header.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::None => b"",
            Self::Newline => b"\n",
        }
    }

    /// Whether the header already ends the line.
    #[must_use]
    pub fn ends_line(self) -> bool {
        self == Self::Newline
    }
}

/// Accumulated result of a run: 0 on success, nonzero once anything failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const SUCCESS: Self = Self(0);
    #[cfg(test)]
    pub const FAILURE: Self = Self(1);

    /// Wrap a raw exit code.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// The process exit code.
    #[must_use]
    pub fn code(self) -> i32 {
        self.0
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ExitStatus {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ExitStatus {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One unit of work for the dumper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRequest {
    /// File or directory to dump.
    pub path: PathBuf,
    /// True for command-line paths; false for children of an expanded directory.
    pub allow_dirs: bool,
    /// Fixed for the whole run.
    pub terminator: Terminator,
}

impl DumpRequest {
    /// A request for a path given on the command line.
    #[must_use]
    pub fn top_level(path: impl Into<PathBuf>, terminator: Terminator) -> Self {
        Self {
            path: path.into(),
            allow_dirs: true,
            terminator,
        }
    }

    /// A request for an entry discovered while expanding a directory.
    /// Never expands further.
    #[must_use]
    pub fn child(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            allow_dirs: false,
            terminator: self.terminator,
        }
    }
}
