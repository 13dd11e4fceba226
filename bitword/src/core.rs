// Words of dynamic sizes

use crate::limbs::{self, Limb, LimbT, limbs_for_size};

#[derive(Clone, PartialEq, Eq, Hash)]
enum BitWordData {
  Small(LimbT),
  Large(Box<[LimbT]>)
}

/// An arbitrary sized word.  The width is fixed when the word is created
/// and no operation changes it, except for the ones that explicitly make
/// a word of a different size.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitWord {
  value: BitWordData,
  bits:  usize
}

fn is_small_size(bits: usize) -> bool { bits <= Limb::BITS }

impl BitWord {

  /// Is this value represented with a single limb.
  fn is_small(&self) -> bool { is_small_size(self.bits) }

  /// How many limbs are needed for a word of this size.
  pub fn limbs(&self) -> usize { limbs_for_size(self.bits) }

  /// The size of the word in bits.
  pub fn bits(&self) -> usize { self.bits }

  /// Create a 0 initialized word of the given size.
  pub fn zero(bits: usize) -> BitWord {
    if is_small_size(bits) {
      BitWord { bits: bits, value: BitWordData::Small(0) }
    } else {
      let ws = vec![0; limbs_for_size(bits)].into_boxed_slice();
      BitWord { bits: bits, value: BitWordData::Large(ws) }
    }
  }

  /// A word with all bits set.
  pub fn ones(bits: usize) -> BitWord { Self::copy(bits, true) }

  /// A word of the given size where every bit is `value`.
  pub fn copy(bits: usize, value: bool) -> BitWord {
    let mut result = Self::zero(bits);
    if value { limbs::fill_bits(result.as_slice_mut(), 0, bits, true) }
    result
  }

  /// Make a word from limbs, least significant first.
  /// Missing limbs are 0, and bits that do not fit are discarded.
  pub fn from_limbs(bits: usize, mut ws: Vec<LimbT>) -> BitWord {
    ws.resize(limbs_for_size(bits).max(1), 0);
    limbs::fix_overflow(&mut ws, bits);
    if is_small_size(bits) {
      BitWord { bits: bits, value: BitWordData::Small(ws[0]) }
    } else {
      BitWord { bits: bits, value: BitWordData::Large(ws.into_boxed_slice()) }
    }
  }

  /// Gain access to the underlying representation of the word.
  ///   * The less significant parts of the word are stored in the elements
  ///     with lower indexes (little endian).
  ///   * Bits past the width of the word are always 0.
  ///   * Words of at most `Limb::BITS` bits (including the empty word)
  ///     are stored in exactly one limb.
  pub fn as_slice(&self) -> &[LimbT] {
    match &self.value {
      BitWordData::Small(w)  => std::slice::from_ref(w),
      BitWordData::Large(ws) => ws
    }
  }

  /// Mutable access to the representation.  Callers must not write past
  /// the width of the word, or must clear those bits with
  /// `limbs::fix_overflow` afterwards.
  pub(crate) fn as_slice_mut(&mut self) -> &mut [LimbT] {
    match &mut self.value {
      BitWordData::Small(w)  => std::slice::from_mut(w),
      BitWordData::Large(ws) => ws
    }
  }

  /// The least significant limb.
  pub fn limb0(&self) -> LimbT { self.as_slice()[0] }

  /// Is this the 0 word.
  pub fn is_zero(&self) -> bool {
    if self.is_small() { return self.limb0() == 0 }
    self.as_slice().iter().all(|&w| w == 0)
  }

}
