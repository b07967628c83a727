use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// Fewer items than distinct prev/active/next slots.
    #[error("carousel needs at least {min} items, found {found}")]
    TooFewItems { found: usize, min: usize },

    #[error("initial index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown item id `{0}`")]
    UnknownItem(String),

    #[error("session storage write failed: {0}")]
    Storage(String),
}
