use thiserror::Error;

/// Errors produced by the colour core.
#[derive(Error, Debug)]
pub enum ShadeError {
    /// Input is not exactly six hexadecimal digits.
    #[error("invalid hex colour {0:?}: expected 6 hex digits")]
    InvalidFormat(String),

    /// More than six characters were committed to a session.
    #[error("hex colour too long: {0} characters, at most 6 allowed")]
    InvalidLength(usize),

    /// Palette state was read before a colour was committed.
    #[error("no colour has been entered yet")]
    NotReady,

    /// A palette needs at least one step per side.
    #[error("palette step count must be at least 1")]
    ZeroSteps,

    /// The system clipboard rejected the copy.
    #[cfg(feature = "clipboard")]
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
