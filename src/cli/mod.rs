/// CLI layer: argument parsing and output context.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::OutputCtx;
