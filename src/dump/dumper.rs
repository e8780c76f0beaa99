/// The dumper: header framing, chunked copy, and one-level directory expansion.
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use super::errors::DumpError;
use super::open::{OpenOutcome, open_regular};
use crate::types::{DumpRequest, ExitStatus, Terminator};

/// Bytes read from a file per `read` call.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Writes framed file contents and error lines to an output sink.
pub struct Dumper<W: Write> {
    out: W,
}

impl<W: Write> Dumper<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output sink.
    #[cfg(test)]
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Dump one path, expanding it if it is a directory and the request allows it.
    ///
    /// Failures are printed to the output in place of content and folded
    /// into the returned status. Nothing here aborts the caller.
    pub fn dump(&mut self, req: &DumpRequest) -> ExitStatus {
        match open_regular(&req.path) {
            OpenOutcome::File(file) => match self.copy_file(&req.path, file, req.terminator) {
                Ok(()) => ExitStatus::SUCCESS,
                Err(err) => self.report(&err),
            },
            OpenOutcome::IsDirectory if req.allow_dirs => self.expand(req),
            OpenOutcome::IsDirectory => self.report(&DumpError::NestedDirectory {
                path: req.path.clone(),
            }),
            OpenOutcome::Failed(err) => self.report(&err),
        }
    }

    /// Dump every immediate entry of a directory. The directory itself gets no header.
    fn expand(&mut self, req: &DumpRequest) -> ExitStatus {
        let entries = match fs::read_dir(&req.path) {
            Ok(entries) => entries,
            Err(source) => {
                return self.report(&DumpError::ListDirectory {
                    path: req.path.clone(),
                    source,
                });
            }
        };

        let mut status = ExitStatus::SUCCESS;
        for entry in entries {
            status |= match entry {
                Ok(entry) => self.dump(&req.child(entry.path())),
                Err(source) => self.report(&DumpError::ListDirectory {
                    path: req.path.clone(),
                    source,
                }),
            };
        }
        status
    }

    /// Copy a regular file's bytes verbatim between a header and a guaranteed final newline.
    ///
    /// The file handle is dropped when this returns, on every path.
    fn copy_file(
        &mut self,
        path: &Path,
        mut file: File,
        terminator: Terminator,
    ) -> Result<(), DumpError> {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut header_written = false;
        // An empty file leaves the header as the last thing written.
        let mut last_newline = terminator.ends_line();

        loop {
            let n = match file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(DumpError::Read {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            };
            if !header_written {
                self.write_header(path, terminator)?;
                header_written = true;
            }
            let chunk = &buf[..n];
            last_newline = chunk.ends_with(b"\n");
            self.out.write_all(chunk)?;
        }

        // Empty files still get a header; `last_newline` defaults to match it.
        if !header_written {
            self.write_header(path, terminator)?;
        }
        if !last_newline {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Emit `<path>:<terminator>` and flush so it lands before any content.
    fn write_header(&mut self, path: &Path, terminator: Terminator) -> Result<(), DumpError> {
        self.out.write_all(&path_bytes(path))?;
        self.out.write_all(b":")?;
        self.out.write_all(terminator.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Print an error line and return the status it contributes.
    fn report(&mut self, err: &DumpError) -> ExitStatus {
        let _ = writeln!(self.out, "{err}");
        let _ = self.out.flush();
        ExitStatus::from(err)
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().into_owned().into_bytes())
}
