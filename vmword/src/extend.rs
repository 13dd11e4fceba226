use bitword::limbs;
use crate::word::Word;
use crate::size::AtMost;

// Changing the size of a word.  The parameters are the size of the result.

impl<const W: usize, const L: usize> Word<W,L> {

  /// Add 0 bits on the most significant side.
  pub fn zero_extend<const WO: usize, const LO: usize>(&self) -> Word<WO,LO> {
    let () = AtMost::<W, WO>::OK;
    self.low_with_zero_extend()
  }

  /// Add copies of the most significant bit on the most significant side.
  pub fn sign_extend<const WO: usize, const LO: usize>(&self) -> Word<WO,LO> {
    let mut result: Word<WO,LO> = self.zero_extend();
    if self.msb() { limbs::fill_bits(&mut result.0, W, WO - W, true) }
    result
  }

  /// Drop the most significant bits, provided that they are all 0.
  pub fn zero_truncate<const WO: usize, const LO: usize>(&self) -> Option<Word<WO,LO>> {
    let () = AtMost::<WO, W>::OK;
    if !limbs::all_bits(&self.0, WO, W - WO, false) { return None }
    Some(self.low())
  }

  /// Drop the most significant bits, provided that they are all copies
  /// of the sign of the result.  The result must have at least 1 bit.
  pub fn sign_truncate<const WO: usize, const LO: usize>(&self) -> Option<Word<WO,LO>> {
    let () = AtMost::<WO, W>::OK;
    let () = AtMost::<1, WO>::OK;
    let sign = self.get_bit(WO - 1);
    if !limbs::all_bits(&self.0, WO, W - WO, sign) { return None }
    Some(self.low())
  }

  /// The least significant bits of this word, with 0s added on the most
  /// significant side if the result is larger.  Never fails.
  pub fn low_with_zero_extend<const WO: usize, const LO: usize>(&self) -> Word<WO,LO> {
    let mut result = Word::<WO,LO>::zero();
    limbs::copy_bits(&mut result.0, 0, &self.0, 0, W.min(WO));
    result
  }

  pub fn resize<const WO: usize, const LO: usize>(&self) -> Word<WO,LO> {
    self.low_with_zero_extend()
  }
}
