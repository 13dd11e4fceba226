//! The named word sizes used by the machine.
//!
//! Going from a smaller kind to a larger one is always explicit, using
//! one of the `to_*` embeddings, which pad with 0s.  A word can only be
//! converted to a kind that is at least as large: anything else is a
//! compile time error.  Going to a smaller kind is done with
//! `zero_truncate`, `sign_truncate`, or `low_with_zero_extend`.

use crate::word::Word;

pub type Byte        = crate::Word!(8);
pub type Word16      = crate::Word!(16);
pub type Word32      = crate::Word!(32);
pub type Word64      = crate::Word!(64);
pub type Word128     = crate::Word!(128);
pub type Address     = crate::Word!(160);
pub type MachineWord = crate::Word!(256);

impl<const W: usize, const L: usize> Word<W,L> {
  pub fn to_word16(&self) -> Word16 { self.zero_extend() }
  pub fn to_word32(&self) -> Word32 { self.zero_extend() }
  pub fn to_word64(&self) -> Word64 { self.zero_extend() }
  pub fn to_word128(&self) -> Word128 { self.zero_extend() }
  pub fn to_address(&self) -> Address { self.zero_extend() }
  pub fn to_machine_word(&self) -> MachineWord { self.zero_extend() }
}

impl From<u8> for Byte {
  fn from(x: u8) -> Self { Byte::from_u64(x as u64) }
}

impl From<&Byte> for u8 {
  fn from(x: &Byte) -> Self { x.to_u64() as u8 }
}

impl From<u16> for Word16 {
  fn from(x: u16) -> Self { Word16::from_u64(x as u64) }
}

impl From<u32> for Word32 {
  fn from(x: u32) -> Self { Word32::from_u64(x as u64) }
}
