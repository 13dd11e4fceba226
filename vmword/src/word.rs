use std::cmp::Ordering;
use std::fmt;
use bitword::{BitWord,Residue,IndexDir,FromLSB,FromMSB};
use bitword::limbs::{self, Limb, LimbT};
use bitword::display::{render_limbs,UPPER_DIGITS,LOWER_DIGITS};
use crate::size::Sum;

/// A word whose size `W` is known at compile time.
/// The bits are stored in `L` limbs, least significant limb first,
/// and all bits at positions `>= W` are 0.  This makes equality and
/// comparison of the limbs the same as comparing the unsigned values.
/// Use the `Word!` macro to write the type without having to compute `L`.
#[derive(Copy,Clone,PartialEq,Eq,Hash)]
pub struct Word<const W: usize, const L: usize>(pub(crate) [LimbT; L]);


/// How many limbs we need to represent the given number of bits.
pub const fn limbs_for_bits(w: usize) -> usize {
  limbs::limbs_for_size(w)
}


impl<const W: usize, const L: usize> Word<W,L> {

  const SIZE_OK: () = assert!(limbs_for_bits(W) == L,
                              "wrong number of limbs for word");

  /// The number of bits in the word.
  pub const BITS: usize = W;

  /// A vector filled with 0.
  pub fn zero() -> Self {
    let () = Self::SIZE_OK;
    Word([0; L])
  }

  /// A vector filled with 1.
  pub fn ones() -> Self { Self::copy(true) }

  /// A vector where all bits are the given value.
  pub fn copy(value: bool) -> Self {
    let mut result = Self::zero();
    if value { limbs::fill_bits(&mut result.0, 0, W, true) }
    result
  }

  /// Make a word from its limbs, least significant first.
  /// Bits past the end of the word are ignored.
  pub fn from_limbs(mut ws: [LimbT; L]) -> Self {
    let () = Self::SIZE_OK;
    limbs::fix_overflow(&mut ws, W);
    Word(ws)
  }

  /// Expose internal representation
  pub fn as_limbs(&self) -> &[LimbT] { &self.0 }

  pub fn bits(&self) -> usize { W }

  pub fn is_zero(&self) -> bool { self.0.iter().all(|&w| w == 0) }

  /// Get the bit at the given position, counting from the side
  /// selected by `INDEX`.
  pub fn index<INDEX: IndexDir>(&self, i: usize) -> bool {
    assert!(i < W);
    limbs::get_bit(&self.0, INDEX::to_lsb(W, i))
  }

  /// Get the bit at the given position. 0 is most significant bit.
  pub fn index_msb(&self, i: usize) -> bool { self.index::<FromMSB>(i) }

  /// Get the bit at the given position. 0 is least significant bit.
  pub fn index_lsb(&self, i: usize) -> bool { self.index::<FromLSB>(i) }

  /// Bit `i`, counting from the least significant bit.
  /// Positions outside the word read as `false`.
  pub fn get_bit(&self, i: usize) -> bool {
    i < W && limbs::get_bit(&self.0, i)
  }

  /// A copy of the word with bit `i` changed.
  /// Positions outside the word are ignored.
  pub fn set_bit(&self, i: usize, value: bool) -> Self {
    let mut result = *self;
    if i < W { limbs::set_bit(&mut result.0, i, value) }
    result
  }

  /// The most significant bit, `false` for the empty word.
  pub fn msb(&self) -> bool { W > 0 && self.get_bit(W - 1) }

  /// The least significant bit, `false` for the empty word.
  pub fn lsb(&self) -> bool { self.get_bit(0) }

  pub fn leading_zeros(&self) -> usize { limbs::leading_zeros(&self.0, W) }

  pub fn count_ones(&self) -> usize {
    self.0.iter().map(|w| w.count_ones() as usize).sum()
  }
}



// -----------------------------------------------------------------------------
// From and To

impl<const W: usize, const L: usize> Word<W,L> {

  /// The least significant `W` bits of `x`.
  pub fn from_u64(x: u64) -> Self {
    let mut result = Self::zero();
    limbs::copy_bits(&mut result.0, 0, &[x as LimbT], 0, W.min(64));
    result
  }

  /// The least significant `W` bits of `x`.
  pub fn from_u128(x: u128) -> Self {
    let src        = [x as LimbT, (x >> 64) as LimbT];
    let mut result = Self::zero();
    limbs::copy_bits(&mut result.0, 0, &src, 0, W.min(128));
    result
  }

  /// `n mod 2^W`
  pub fn from_nat(n: &num::BigUint) -> Self {
    let mut result = Self::zero();
    limbs::store_uint(&mut result.0, W, n);
    result
  }

  /// Two's complement encoding, wrapping around if `n` does not fit.
  pub fn from_signed_int(n: &num::BigInt) -> Self {
    Self::from_dynamic(&BitWord::from_signed_int(W, n))
  }

  pub fn to_nat(&self) -> num::BigUint {
    num::BigUint::new(limbs::as_vec_u32(&self.0))
  }

  /// The value in two's complement.  The empty word is 0.
  pub fn to_signed_int(&self) -> num::BigInt {
    BitWord::from(self).to_signed_int()
  }

  /// The 64 least significant bits.
  pub fn to_u64(&self) -> u64 {
    limbs::read_bits(&self.0, 0, W.min(Limb::BITS))
  }

  /// The value, if it fits in 64 bits.
  pub fn try_to_u64(&self) -> Option<u64> {
    if !limbs::all_bits(&self.0, 64, W.saturating_sub(64), false) {
      return None
    }
    Some(self.to_u64())
  }

  pub fn to_residue(&self) -> Residue { BitWord::from(self).to_residue() }

  /// Encode a residue modulo `2^W`.
  pub fn from_residue(x: &Residue) -> Self {
    assert_eq!(x.bits(), W, "residue has the wrong modulus");
    Self::from_nat(x.value())
  }

  /// Copy a dynamic word of the same size.
  pub(crate) fn from_dynamic(x: &BitWord) -> Self {
    let mut result = Self::zero();
    limbs::copy_bits(&mut result.0, 0, x.as_slice(), 0, W.min(x.bits()));
    result
  }
}

/// Get the least significant bits
impl<const W: usize, const L: usize> From<&Word<W,L>> for u64 {
  fn from(x: &Word<W,L>) -> Self { x.to_u64() }
}

impl<const W: usize, const L: usize> From<&Word<W,L>> for num::BigUint {
  fn from(x: &Word<W,L>) -> Self { x.to_nat() }
}

/// Two's complement.
impl<const W: usize, const L: usize> From<&Word<W,L>> for num::BigInt {
  fn from(x: &Word<W,L>) -> Self { x.to_signed_int() }
}

impl<const W: usize, const L: usize> From<u64> for Word<W,L> {
  fn from(x: u64) -> Self { Self::from_u64(x) }
}

impl<const W: usize, const L: usize> From<u128> for Word<W,L> {
  fn from(x: u128) -> Self { Self::from_u128(x) }
}

impl<const W: usize, const L: usize> From<&num::BigUint> for Word<W,L> {
  fn from(n: &num::BigUint) -> Self { Self::from_nat(n) }
}

impl<const W: usize, const L: usize> From<&num::BigInt> for Word<W,L> {
  fn from(n: &num::BigInt) -> Self { Self::from_signed_int(n) }
}

impl From<bool> for Word<1,1> {
  fn from(b: bool) -> Self { Self::copy(b) }
}



// -----------------------------------------------------------------------------
// Append

impl<const WU: usize, const LU: usize> Word<WU,LU> {

  /// Append two words.  `self` ends up in the most significant position.
  pub fn concat
    < const WL: usize, const LL: usize
    , const WO: usize, const LO: usize
    >
    (&self, lower: &Word<WL,LL>) -> Word<WO,LO> {
    let () = Sum::<WU, WL, WO>::OK;
    let mut result = Word::<WO,LO>::zero();
    limbs::copy_bits(&mut result.0, 0,  &lower.0, 0, WL);
    limbs::copy_bits(&mut result.0, WL, &self.0,  0, WU);
    result
  }

  /// Add a new least significant bit.
  pub fn cons<const WO: usize, const LO: usize>(&self, bit: bool) -> Word<WO,LO> {
    let () = Sum::<WU, 1, WO>::OK;
    let mut result = Word::<WO,LO>::zero();
    limbs::copy_bits(&mut result.0, 1, &self.0, 0, WU);
    limbs::set_bit(&mut result.0, 0, bit);
    result
  }
}

impl<const W: usize, const L: usize> Word<W,L> {

  /// Inverse of `split_lsb`.
  pub fn join_bit<const WI: usize, const LI: usize>
    ((upper, bit): (Word<WI,LI>, bool)) -> Self {
    upper.cons(bit)
  }

  /// Inverse of `split_msb`.
  pub fn join_msb<const WI: usize, const LI: usize>
    ((bit, lower): (bool, Word<WI,LI>)) -> Self {
    let () = Sum::<1, WI, W>::OK;
    let mut result = Self::zero();
    limbs::copy_bits(&mut result.0, 0, &lower.0, 0, WI);
    limbs::set_bit(&mut result.0, WI, bit);
    result
  }
}



// -----------------------------------------------------------------------------
// Traversal

/// Traverse Word<W,L> as bits, starting from most significant.
pub struct TraverseBits<'a, const W: usize, const L: usize> {
  vec: &'a Word<W,L>,
  ix:  usize
}

impl<'a, const W: usize, const L: usize> Iterator for TraverseBits<'a,W,L> {
  type Item = bool;

  fn next(&mut self) -> Option<Self::Item> {
    if self.ix >= W { return None }
    let i = self.ix;
    self.ix += 1;
    Some(self.vec.index_msb(i))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = W - self.ix;
    (n, Some(n))
  }
}

impl<'a, const W: usize, const L: usize> ExactSizeIterator for TraverseBits<'a,W,L> {}

impl<'a, const W: usize, const L: usize> IntoIterator for &'a Word<W,L> {
  type Item     = bool;
  type IntoIter = TraverseBits<'a,W,L>;
  fn into_iter(self) -> Self::IntoIter { TraverseBits { vec: self, ix: 0 } }
}

impl<const W: usize, const L: usize> Word<W,L> {

  /// Bits starting from the least significant.
  pub fn iter_bits_lsb(&self) -> impl Iterator<Item = bool> + '_ {
    (0 .. W).map(move |i| self.index_lsb(i))
  }

  /// Make a word from exactly `W` bits, most significant first.
  pub fn from_bits_msb(xs: impl IntoIterator<Item = bool>) -> Self {
    let mut result = Self::zero();
    let mut count  = 0;
    for b in xs {
      assert!(count < W, "too many bits");
      limbs::set_bit(&mut result.0, W - 1 - count, b);
      count += 1;
    }
    assert_eq!(count, W, "not enough bits");
    result
  }
}



// -----------------------------------------------------------------------------
// Comparison

/// Unsigned comparison.
impl<const W: usize, const L: usize> Ord for Word<W,L> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.iter().rev().cmp(other.0.iter().rev())
  }
}

impl<const W: usize, const L: usize> PartialOrd for Word<W,L> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}



// -----------------------------------------------------------------------------
// Formatting

impl<const W: usize, const L: usize> Word<W,L> {
  fn render(&self, each: usize, table: &[char]) -> String {
    render_limbs(&self.0, W, each, table)
  }
}

impl<const W: usize, const L: usize> fmt::Binary for Word<W,L> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = self.render(1, &UPPER_DIGITS);
    if W == 0 { s.push('0') } // special case so that we see something.
    f.pad_integral(true, "0b", &s)
  }
}

impl<const W: usize, const L: usize> fmt::UpperHex for Word<W,L> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.render(4, &UPPER_DIGITS))
  }
}

impl<const W: usize, const L: usize> fmt::LowerHex for Word<W,L> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.render(4, &LOWER_DIGITS))
  }
}

impl<const W: usize, const L: usize> fmt::Octal for Word<W,L> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0o", &self.render(3, &UPPER_DIGITS))
  }
}

/// Base 10.  Base 16 is probably more useful, but the hex traits
/// cover those.
impl<const W: usize, const L: usize> fmt::Display for Word<W,L> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "", &self.to_nat().to_string())
  }
}

impl<const W: usize, const L: usize> fmt::Debug for Word<W,L> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Word<{}>({:#X})", W, self)
  }
}



// -----------------------------------------------------------------------------
// Macros

#[macro_export]
/// A convenient way to write a `Word` type without having to specify
/// the number of limbs.
macro_rules! Word {
  ($w:expr) => { $crate::word::Word
                       < {$w}
                       , {$crate::word::limbs_for_bits($w)}
                       >
  };
}

/// `append!(FRONT, BACK, xs, ys)` appends a word of `FRONT` bits and
/// a word of `BACK` bits.
#[macro_export]
macro_rules! append {
  ($FRONT:expr,$BACK:expr,$xs:expr,$ys:expr) => { {
    const L2: usize = $crate::word::limbs_for_bits($BACK);
    const W3: usize = $FRONT + $BACK;
    const L3: usize = $crate::word::limbs_for_bits(W3);
    $xs.concat::<{$BACK}, L2, W3, L3>($ys)
  } }
}



// -----------------------------------------------------------------------------
// Tests
