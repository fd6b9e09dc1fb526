use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by the review and session loops.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("set \"{0}\" has no cards to study")]
    EmptySet(String),

    #[error("cannot score a round with no cards")]
    EmptyRound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A card line that did not split into exactly two non-empty fields.
///
/// Parsing records these instead of failing; callers decide whether to
/// warn, refuse the set, or ignore them. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed card at line {line}: {text:?}")]
pub struct MalformedCard {
    pub line: usize,
    pub text: String,
}
