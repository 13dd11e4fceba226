use bitword::BitWord;
use crate::kinds::Byte;
use crate::size::Product;
use crate::word::Word;

/// Two upper case hex digits for each byte, each followed by a space.
pub fn bytes_to_hex(bytes: &[Byte]) -> String {
  let mut s = String::with_capacity(3 * bytes.len());
  for b in bytes { s.push_str(&format!("{:02X} ", b)) }
  s
}

/// Pack bytes into a word of `8 * bytes.len()` bits.
/// The first byte is the least significant one.
pub fn pack_bytes(bytes: &[Byte]) -> BitWord {
  let raw: Vec<u8> = bytes.iter().map(u8::from).collect();
  BitWord::from_bytes_le(&raw)
}

/// The bytes of a word, least significant first.  If the size of the
/// word is not a multiple of 8, the last byte is padded with 0s.
pub fn unpack_bytes(x: &BitWord) -> Vec<Byte> {
  x.to_bytes_le().into_iter().map(Byte::from).collect()
}

impl<const W: usize, const L: usize> Word<W,L> {

  /// The bytes of the word, least significant first.
  pub fn to_le_bytes<const N: usize>(&self) -> [Byte; N] {
    let () = Product::<N, 8, W>::OK;
    std::array::from_fn(|i| self.slice_le(8 * i))
  }

  /// Inverse of `to_le_bytes`.
  pub fn from_le_bytes<const N: usize>(bytes: &[Byte; N]) -> Self {
    let () = Product::<N, 8, W>::OK;
    bytes.iter().enumerate()
         .fold(Self::zero(), |acc, (i,b)| acc.update_slice(8 * i, b))
  }
}
