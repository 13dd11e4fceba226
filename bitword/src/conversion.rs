use num::Integer;
use crate::BitWord;
use crate::limbs::{self, LimbT};

impl BitWord {

  pub fn from_u8(bits: usize, value: u8) -> BitWord {
    Self::from_u64(bits, value as u64)
  }

  pub fn from_u16(bits: usize, value: u16) -> BitWord {
    Self::from_u64(bits, value as u64)
  }

  pub fn from_u32(bits: usize, value: u32) -> BitWord {
    Self::from_u64(bits, value as u64)
  }

  /// The least significant `bits` bits of `value`.
  pub fn from_u64(bits: usize, value: u64) -> BitWord {
    BitWord::from_limbs(bits, vec![value as LimbT])
  }

  /// The least significant `bits` bits of `value`.
  pub fn from_u128(bits: usize, value: u128) -> BitWord {
    BitWord::from_limbs(bits, vec![value as LimbT, (value >> 64) as LimbT])
  }

  /// Encode a natural number.  Numbers that do not fit wrap around,
  /// so this is `n mod 2^bits`.
  pub fn from_nat(bits: usize, n: &num::BigUint) -> BitWord {
    let mut result = BitWord::zero(bits);
    limbs::store_uint(result.as_slice_mut(), bits, n);
    result
  }

  /// Two's complement encoding of an integer, wrapping around if it does
  /// not fit.
  pub fn from_signed_int(bits: usize, n: &num::BigInt) -> BitWord {
    let modulus = num::BigInt::from(1_u64) << bits;
    let value   = n.mod_floor(&modulus);
    Self::from_nat(bits, value.magnitude())
  }

  /// The unsigned value of the word.
  pub fn to_nat(&self) -> num::BigUint {
    num::BigUint::new(limbs::as_vec_u32(self.as_slice()))
  }

  /// The value of the word, in two's complement.
  /// The most significant bit is the sign.  The empty word is 0.
  pub fn to_signed_int(&self) -> num::BigInt {
    let value = num::BigInt::from(self.to_nat());
    if !self.msb() { return value }
    value - (num::BigInt::from(1_u64) << self.bits())
  }

  /// The 64 least significant bits.
  pub fn to_u64(&self) -> u64 { self.limb0() }

  /// The value, if it fits in 64 bits.
  pub fn try_to_u64(&self) -> Option<u64> {
    if self.as_slice()[1..].iter().any(|&w| w != 0) { return None }
    Some(self.limb0())
  }
}

impl From<&BitWord> for num::BigUint {
  fn from(x: &BitWord) -> Self { x.to_nat() }
}

impl From<u8> for BitWord {
  fn from(x: u8) -> Self { BitWord::from_u8(8, x) }
}

impl From<u16> for BitWord {
  fn from(x: u16) -> Self { BitWord::from_u16(16, x) }
}

impl From<u32> for BitWord {
  fn from(x: u32) -> Self { BitWord::from_u32(32, x) }
}

impl From<u64> for BitWord {
  fn from(x: u64) -> Self { BitWord::from_u64(64, x) }
}

impl From<bool> for BitWord {
  fn from(x: bool) -> Self { BitWord::copy(1, x) }
}
