// Text encodings.
//
// The `from_*` decoders are lenient: characters outside the alphabet
// decode as 0 and never cause an error.  The `parse_*` decoders accept the
// same inputs but report anything outside the alphabet.

use std::str::FromStr;
use crate::{BitWord,WordError};
use crate::limbs::{self, LimbT};
use crate::display::{UPPER_DIGITS,render_digits};

/// Decode digits of `each` bits, most significant first.
fn from_digits(each: usize, ds: impl IntoIterator<Item = u32>) -> BitWord {
  let ds: Vec<u32> = ds.into_iter().collect();
  let mut result   = BitWord::zero(each * ds.len());
  let out          = result.as_slice_mut();
  for (i,&d) in ds.iter().rev().enumerate() {
    limbs::write_bits(out, i * each, each, d as LimbT)
  }
  result
}

fn strict_digits(s: &str, radix: u32) -> Result<Vec<u32>, WordError> {
  s.chars().enumerate().map(|(i,c)| {
    c.to_digit(radix)
     .ok_or(WordError::InvalidDigit { radix: radix, found: c, index: i })
  }).collect()
}

impl BitWord {

  /// Decode a hexadecimal string, 4 bits per character, most significant
  /// digit first.  Characters that are not hex digits decode as 0.
  pub fn from_hex(s: &str) -> BitWord {
    from_digits(4, s.chars().map(|c| c.to_digit(16).unwrap_or(0)))
  }

  /// Decode a hexadecimal string, rejecting characters that are not
  /// hex digits.
  pub fn parse_hex(s: &str) -> Result<BitWord, WordError> {
    Ok(from_digits(4, strict_digits(s, 16)?))
  }

  /// Decode a binary string, most significant bit first.
  /// `'1'` is a set bit, anything else is a clear bit.
  pub fn from_bin(s: &str) -> BitWord {
    BitWord::from_bits_msb(s.chars().map(|c| c == '1'))
  }

  /// Decode a binary string, rejecting characters other than `0` and `1`.
  pub fn parse_bin(s: &str) -> Result<BitWord, WordError> {
    Ok(from_digits(1, strict_digits(s, 2)?))
  }

  /// Pack a string into bytes, one per character.  The first character
  /// is the least significant byte.  Characters past `0xFF` keep only
  /// their 8 least significant bits.
  pub fn from_ascii(s: &str) -> BitWord {
    let bytes: Vec<u8> = s.chars().map(|c| c as u32 as u8).collect();
    BitWord::from_bytes_le(&bytes)
  }

  /// Like `from_ascii` but rejects characters that are not ASCII.
  pub fn parse_ascii(s: &str) -> Result<BitWord, WordError> {
    match s.chars().enumerate().find(|(_,c)| !c.is_ascii()) {
      Some((i,c)) => Err(WordError::NonAscii { found: c, index: i }),
      None        => Ok(BitWord::from_bytes_le(s.as_bytes()))
    }
  }

  /// A word of `8 * bytes.len()` bits, with the first byte in the least
  /// significant position.
  pub fn from_bytes_le(bytes: &[u8]) -> BitWord {
    let mut result = BitWord::zero(8 * bytes.len());
    let out        = result.as_slice_mut();
    for (i,&b) in bytes.iter().enumerate() {
      limbs::write_bits(out, 8 * i, 8, b as LimbT)
    }
    result
  }

  /// The bytes of the word, least significant first.  If the size of the
  /// word is not a multiple of 8, the last byte is padded with 0s.
  pub fn to_bytes_le(&self) -> Vec<u8> {
    let ws = self.as_slice();
    (0 .. (self.bits() + 7) / 8).map(|i| limbs::read_bits(ws, 8 * i, 8) as u8)
                                .collect()
  }

  /// Upper case hexadecimal, most significant digit first, no prefix.
  /// If the size is not a multiple of 4, the first digit covers the
  /// left over most significant bits.
  pub fn to_hex(&self) -> String { render_digits(self, 4, &UPPER_DIGITS) }

  /// Binary, most significant bit first, no prefix.
  pub fn to_bin(&self) -> String { render_digits(self, 1, &UPPER_DIGITS) }
}

/// Literals with an explicit base: `0x2A` is an 8 bit word, `0b101`
/// a 3 bit word.  Parsing is strict.
impl FromStr for BitWord {
  type Err = WordError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some(digits) = s.strip_prefix("0x") { return Self::parse_hex(digits) }
    if let Some(digits) = s.strip_prefix("0b") { return Self::parse_bin(digits) }
    Err(WordError::MissingPrefix(s.to_string()))
  }
}
