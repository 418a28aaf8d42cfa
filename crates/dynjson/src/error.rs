use thiserror::Error;

/// A classified decode failure and the byte offset of the offending input.
///
/// The offset points at the byte that could not be accepted; for
/// [`ErrorKind::UnexpectedEndOfInput`] it is the input length, and for
/// [`ErrorKind::RecurseLimitExceeded`] it is the opener that exceeded the
/// depth limit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct DecodeError {
    kind: ErrorKind,
    offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The category of a decode failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input ended while a token was still required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A byte that no rule of the grammar accepts at its position.
    #[error("invalid character")]
    InvalidCharacter,
    /// Container nesting exceeded [`MAX_RECURSE`](crate::MAX_RECURSE).
    #[error("nesting exceeds the recursion limit")]
    RecurseLimitExceeded,
    /// A backslash followed by a byte that does not begin a valid escape.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A non-hexadecimal digit inside a `\u` escape.
    #[error("invalid hexadecimal digit in unicode escape")]
    InvalidHexEscape,
    /// String content that is not well-formed UTF-8, with replacement
    /// disabled.
    #[error("invalid unicode sequence")]
    InvalidUnicode,
    /// A UTF-16 surrogate escape without its partner, with replacement
    /// disabled.
    #[error("unpaired surrogate escape")]
    UnpairedSurrogate,
}
