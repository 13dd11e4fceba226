use crate::BitWord;
use crate::limbs;

/// Specify from which side of a word are we indexing.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum IndexFrom {
  /// Index from the least significant side of the word.
  Lsb,

  /// Index from the most significant side of the word.
  Msb
}


/// Direction for indexing.
pub trait IndexDir {
  const DIR: IndexFrom;

  /// Turn an index in this direction into an index from the LSB,
  /// for a word with `bits` bits.  Assumes `i < bits`.
  fn to_lsb(bits: usize, i: usize) -> usize {
    match Self::DIR {
      IndexFrom::Msb => bits - i - 1,
      IndexFrom::Lsb => i
    }
  }
}

/// Index from the least significant side of the word.
#[derive(Clone,Copy,Debug)]
pub struct FromLSB;

/// Index from the most significant side of the word.
#[derive(Clone,Copy,Debug)]
pub struct FromMSB;

impl IndexDir for FromLSB { const DIR: IndexFrom = IndexFrom::Lsb; }
impl IndexDir for FromMSB { const DIR: IndexFrom = IndexFrom::Msb; }

impl BitWord {

  /// Extract a bit at the given index.
  pub fn index<INDEX: IndexDir>(&self, index: usize) -> bool {
    assert!(index < self.bits());
    limbs::get_bit(self.as_slice(), INDEX::to_lsb(self.bits(), index))
  }

  pub fn index_msb(&self, i: usize) -> bool { self.index::<FromMSB>(i) }
  pub fn index_lsb(&self, i: usize) -> bool { self.index::<FromLSB>(i) }

  /// The bit at position `i`, where 0 is the least significant bit.
  /// Positions past the end of the word read as `false`.
  pub fn get_bit(&self, i: usize) -> bool {
    i < self.bits() && limbs::get_bit(self.as_slice(), i)
  }

  /// A copy of this word with bit `i` (0 is least significant) replaced.
  /// Positions past the end of the word leave it unchanged.
  pub fn set_bit(&self, i: usize, value: bool) -> BitWord {
    let mut result = self.clone();
    if i < self.bits() { limbs::set_bit(result.as_slice_mut(), i, value) }
    result
  }

  /// The most significant bit, `false` for the empty word.
  pub fn msb(&self) -> bool {
    self.bits() > 0 && self.index_msb(0)
  }

  /// The least significant bit, `false` for the empty word.
  pub fn lsb(&self) -> bool {
    self.bits() > 0 && self.index_lsb(0)
  }

  pub fn leading_zeros(&self) -> usize {
    limbs::leading_zeros(self.as_slice(), self.bits())
  }

  pub fn count_ones(&self) -> usize {
    self.as_slice().iter().map(|w| w.count_ones() as usize).sum()
  }
}
