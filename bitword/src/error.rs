use thiserror::Error;

/// Errors from the strict text decoders and from width checked conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
  #[error("invalid base {radix} digit {found:?} at position {index}")]
  InvalidDigit { radix: u32, found: char, index: usize },

  #[error("non-ASCII character {found:?} at position {index}")]
  NonAscii { found: char, index: usize },

  #[error("expected a `0x` or `0b` prefix in {0:?}")]
  MissingPrefix(String),

  #[error("expected a {expected} bit word, found {found} bits")]
  WidthMismatch { expected: usize, found: usize },
}
