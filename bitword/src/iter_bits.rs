use std::marker::PhantomData;
use crate::BitWord;
use crate::limbs;
use crate::index::{IndexDir,FromLSB,FromMSB};

impl BitWord {

  /// Iterate over the bits.
  pub fn iter_bits<INDEX: IndexDir>(&self) -> TraverseBits<'_, INDEX> {
    TraverseBits { dir: PhantomData, vec: self, ix: 0 }
  }

  /// Iterate over the bits, starting at the most significant end.
  pub fn iter_bits_msb(&self) -> TraverseBits<'_, FromMSB> { self.iter_bits() }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_bits_lsb(&self) -> TraverseBits<'_, FromLSB> { self.iter_bits() }

  /// Make a word out of bits, most significant first.
  /// The size of the word is the number of bits.
  pub fn from_bits_msb(xs: impl IntoIterator<Item = bool>) -> BitWord {
    let bits: Vec<bool> = xs.into_iter().collect();
    Self::from_bits_lsb(bits.into_iter().rev())
  }

  /// Make a word out of bits, least significant first.
  /// The size of the word is the number of bits.
  pub fn from_bits_lsb(xs: impl IntoIterator<Item = bool>) -> BitWord {
    let mut ws   = Vec::new();
    let mut bits = 0;
    for b in xs {
      if bits % limbs::Limb::BITS == 0 { ws.push(0) }
      limbs::set_bit(&mut ws, bits, b);
      bits += 1;
    }
    BitWord::from_limbs(bits, ws)
  }
}

/// Traverse the bits of a BitWord, in the direction given by `INDEX`.
#[derive(Clone)]
pub struct TraverseBits<'a, INDEX: IndexDir> {
  dir: PhantomData<INDEX>,
  vec: &'a BitWord,
  ix:  usize
}

impl<'a, INDEX: IndexDir> Iterator for TraverseBits<'a, INDEX> {
  type Item = bool;
  fn next(&mut self) -> Option<Self::Item> {
    if self.ix >= self.vec.bits() {
      None
    } else {
      let i = self.ix;
      self.ix += 1;
      Some(self.vec.index::<INDEX>(i))
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.vec.bits() - self.ix;
    (n, Some(n))
  }
}

impl<'a, INDEX: IndexDir> ExactSizeIterator for TraverseBits<'a, INDEX> {}

/// Most significant bit first, which is the order in which words are
/// written.
impl<'a> IntoIterator for &'a BitWord {
  type Item     = bool;
  type IntoIter = TraverseBits<'a, FromMSB>;
  fn into_iter(self) -> Self::IntoIter { self.iter_bits() }
}
