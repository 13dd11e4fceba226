// Conversions between fixed size words and the dynamic `BitWord`.

use bitword::{BitWord,WordError};
use crate::word::Word;

impl<const W: usize, const L: usize> From<&Word<W,L>> for BitWord {
  fn from(x: &Word<W,L>) -> Self {
    BitWord::from_limbs(W, x.as_limbs().to_vec())
  }
}

/// Fails if the sizes of the words are different.
impl<const W: usize, const L: usize> TryFrom<&BitWord> for Word<W,L> {
  type Error = WordError;

  fn try_from(x: &BitWord) -> Result<Self, Self::Error> {
    if x.bits() != W {
      return Err(WordError::WidthMismatch { expected: W, found: x.bits() })
    }
    Ok(Self::from_dynamic(x))
  }
}
