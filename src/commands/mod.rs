/// Command layer: the driver over command-line paths.
pub mod dump;
