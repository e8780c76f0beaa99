/// Driver: dump every command-line path in order and fold the statuses.
use std::io::Write;
use std::path::PathBuf;

use crate::cli::OutputCtx;
use crate::dump::Dumper;
use crate::types::{DumpRequest, ExitStatus};

/// Run the dump over `paths`, writing to `out`.
///
/// Every path is attempted; a failure on one never stops the rest.
#[must_use]
pub fn run<W: Write>(paths: &[PathBuf], ctx: &OutputCtx, out: W) -> ExitStatus {
    let mut dumper = Dumper::new(out);
    let mut status = ExitStatus::SUCCESS;
    for path in paths {
        status |= dumper.dump(&DumpRequest::top_level(path, ctx.terminator));
    }
    status
}
