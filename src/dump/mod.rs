/// Dump layer: opening paths, framing file contents, expanding directories.
pub mod dumper;
pub mod errors;
pub mod open;

pub use dumper::Dumper;
