// Text encodings of fixed size words.
//
// The `from_*` decoders are lenient: bad characters decode as 0, and the
// decoded value is cut or padded to fit the word.  The `parse_*` decoders
// report bad characters and values that do not fit.

use std::str::FromStr;
use bitword::{BitWord,WordError};
use bitword::display::{render_limbs,UPPER_DIGITS};
use crate::word::Word;

impl<const W: usize, const L: usize> Word<W,L> {

  /// Upper case hexadecimal, most significant digit first, no prefix.
  /// If `W` is not a multiple of 4, the first digit covers the left over
  /// most significant bits.
  pub fn to_hex(&self) -> String { render_limbs(&self.0, W, 4, &UPPER_DIGITS) }

  /// Binary, most significant bit first, no prefix.
  pub fn to_bin(&self) -> String { render_limbs(&self.0, W, 1, &UPPER_DIGITS) }

  /// Decode hexadecimal digits, keeping the `W` least significant bits.
  pub fn from_hex(s: &str) -> Self { Self::from_dynamic(&BitWord::from_hex(s)) }

  /// Decode binary digits, keeping the `W` least significant bits.
  pub fn from_bin(s: &str) -> Self { Self::from_dynamic(&BitWord::from_bin(s)) }

  /// Pack characters into bytes, first character least significant,
  /// keeping the `W` least significant bits.
  pub fn from_ascii(s: &str) -> Self { Self::from_dynamic(&BitWord::from_ascii(s)) }

  /// Decode exactly as many hex digits as `to_hex` produces.
  /// The bits of the first digit that are outside the word must be 0.
  pub fn parse_hex(s: &str) -> Result<Self, WordError> {
    Self::fit(BitWord::parse_hex(s)?, (W + 3) / 4 * 4)
  }

  /// Decode exactly `W` binary digits.
  pub fn parse_bin(s: &str) -> Result<Self, WordError> {
    Self::fit(BitWord::parse_bin(s)?, W)
  }

  /// Decode exactly `W / 8` ASCII characters.
  pub fn parse_ascii(s: &str) -> Result<Self, WordError> {
    Self::fit(BitWord::parse_ascii(s)?, W)
  }

  fn fit(x: BitWord, digits_bits: usize) -> Result<Self, WordError> {
    let mismatch = WordError::WidthMismatch { expected: W, found: x.bits() };
    if x.bits() != digits_bits { return Err(mismatch) }
    let y = x.zero_truncate(digits_bits - W).ok_or(mismatch)?;
    Self::try_from(&y)
  }
}

/// Literals with an explicit base, `0x` or `0b`.  Parsing is strict.
impl<const W: usize, const L: usize> FromStr for Word<W,L> {
  type Err = WordError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some(digits) = s.strip_prefix("0x") { return Self::parse_hex(digits) }
    if let Some(digits) = s.strip_prefix("0b") { return Self::parse_bin(digits) }
    Err(WordError::MissingPrefix(s.to_string()))
  }
}


#[cfg(test)]
mod tests {
  use crate::Word;
  use bitword::WordError;

  #[test]
  fn test_literals() {
    assert_eq!(<Word!(8)>::from_hex("2A").to_u64(), 42);
    assert_eq!(<Word!(8)>::from_bin("00101010").to_u64(), 42);
    assert_eq!(<Word!(8)>::from_ascii("*").to_u64(), 42);
    assert_eq!(<Word!(8)>::from(300_u64).to_hex(), "2C");
    assert_eq!(<Word!(16)>::from_ascii("ab").to_u64(), 0x6261);
    assert_eq!(<Word!(32)>::from_ascii("ab").to_u64(), 0x6261);
    assert_eq!(<Word!(8)>::from_hex("1234").to_u64(), 0x34);
    assert_eq!(<Word!(8)>::from_hex("G1").to_u64(), 1);
  }

  #[test]
  fn test_to_text() {
    assert_eq!(<Word!(5)>::from(0x1F_u64).to_hex(), "1F");
    assert_eq!(<Word!(3)>::from(5_u64).to_hex(), "5");
    assert_eq!(<Word!(0)>::zero().to_hex(), "");
    assert_eq!(<Word!(6)>::from(0b101_u64).to_bin(), "000101");
    assert_eq!(<Word!(160)>::ones().to_hex(), "F".repeat(40));
  }

  #[test]
  fn test_parse() {
    assert_eq!(<Word!(8)>::parse_hex("2a"), Ok(<Word!(8)>::from(42_u64)));
    assert_eq!(<Word!(5)>::parse_hex("1F"), Ok(<Word!(5)>::from(0x1F_u64)));
    assert_eq!( <Word!(5)>::parse_hex("2F")
              , Err(WordError::WidthMismatch { expected: 5, found: 8 }));
    assert_eq!( <Word!(8)>::parse_hex("2A0")
              , Err(WordError::WidthMismatch { expected: 8, found: 12 }));
    assert_eq!( <Word!(8)>::parse_hex("2G")
              , Err(WordError::InvalidDigit { radix: 16, found: 'G', index: 1 }));
    assert_eq!(<Word!(3)>::parse_bin("101"), Ok(<Word!(3)>::from(5_u64)));
    assert!(<Word!(3)>::parse_bin("0101").is_err());
    assert_eq!(<Word!(16)>::parse_ascii("ab"), Ok(<Word!(16)>::from(0x6261_u64)));
    assert!(<Word!(16)>::parse_ascii("abc").is_err());
  }

  #[test]
  fn test_from_str() {
    assert_eq!("0x2A".parse::<Word!(8)>(), Ok(<Word!(8)>::from(42_u64)));
    assert_eq!("0b101".parse::<Word!(3)>(), Ok(<Word!(3)>::from(5_u64)));
    assert_eq!("42".parse::<Word!(8)>(), Err(WordError::MissingPrefix("42".into())));
  }
}
