/// Output context shared by the driver.
use crate::types::Terminator;

/// Output context passed to the driver.
pub struct OutputCtx {
    /// Written after every `<path>:` header.
    pub terminator: Terminator,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(terminator: Terminator) -> Self {
        Self { terminator }
    }
}
