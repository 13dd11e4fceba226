use crate::BitWord;
use crate::limbs;

impl BitWord {

  /// Add `extra` 0 bits on the most significant side.
  pub fn zero_extend(&self, extra: usize) -> BitWord {
    self.low_with_zero_extend(self.bits() + extra)
  }

  /// Add `extra` copies of the most significant bit on the most
  /// significant side.  The empty word extends with 0s.
  pub fn sign_extend(&self, extra: usize) -> BitWord {
    let mut result = self.zero_extend(extra);
    if self.msb() {
      limbs::fill_bits(result.as_slice_mut(), self.bits(), extra, true)
    }
    result
  }

  /// Remove the `extra` most significant bits, provided that they are all 0.
  /// Returns `None` if removing the bits would change the value.
  pub fn zero_truncate(&self, extra: usize) -> Option<BitWord> {
    assert!(extra <= self.bits());
    let keep = self.bits() - extra;
    if !limbs::all_bits(self.as_slice(), keep, extra, false) { return None }
    Some(self.low(keep))
  }

  /// Remove the `extra` most significant bits, provided that they are all
  /// copies of the sign of the remaining word.  Returns `None` if removing
  /// the bits would change the signed value.
  pub fn sign_truncate(&self, extra: usize) -> Option<BitWord> {
    assert!(extra < self.bits());
    let keep = self.bits() - extra;
    let sign = self.index_lsb(keep - 1);
    if !limbs::all_bits(self.as_slice(), keep, extra, sign) { return None }
    Some(self.low(keep))
  }

  /// A word of exactly `bits` bits: the least significant bits of this
  /// word, with 0s added on the most significant side if it is too short.
  /// Never fails.
  pub fn low_with_zero_extend(&self, bits: usize) -> BitWord {
    let mut result = BitWord::zero(bits);
    let n = bits.min(self.bits());
    limbs::copy_bits(result.as_slice_mut(), 0, self.as_slice(), 0, n);
    result
  }

  pub fn resize(&self, bits: usize) -> BitWord { self.low_with_zero_extend(bits) }
}
