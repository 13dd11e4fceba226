use std::marker::PhantomData;
use crate::BitWord;
use crate::limbs;
use crate::index::{IndexDir,IndexFrom,FromMSB,FromLSB};

impl BitWord {

  /// Extract a sub-word starting at the given bit offset.
  /// The offset counts from the end of the word selected by `INDEX`
  /// to the nearest end of the sub-word.
  pub fn sub_word<INDEX: IndexDir>(&self, sub_bits: usize, index: usize) -> BitWord {
    assert!(index + sub_bits <= self.bits());

    // Make into LSB index
    let i = match INDEX::DIR {
              IndexFrom::Msb => self.bits() - sub_bits - index,
              IndexFrom::Lsb => index
            };

    let mut result = BitWord::zero(sub_bits);
    limbs::copy_bits(result.as_slice_mut(), 0, self.as_slice(), i, sub_bits);
    result
  }

  pub fn sub_word_msb(&self, sub_bits: usize, index: usize) -> BitWord {
    self.sub_word::<FromMSB>(sub_bits,index)
  }

  pub fn sub_word_lsb(&self, sub_bits: usize, index: usize) -> BitWord {
    self.sub_word::<FromLSB>(sub_bits,index)
  }

  /// The `n` most significant bits.
  pub fn high(&self, n: usize) -> BitWord { self.sub_word_msb(n, 0) }

  /// The `n` least significant bits.
  pub fn low(&self, n: usize) -> BitWord { self.sub_word_lsb(n, 0) }

  /// The `width` bits that have `offset` bits below them.
  pub fn slice(&self, offset: usize, width: usize) -> BitWord {
    self.sub_word_lsb(width, offset)
  }

  /// Replace the bits that have `offset` bits below them with `value`.
  /// All other bits are kept.
  pub fn update_slice(&self, offset: usize, value: &BitWord) -> BitWord {
    assert!(offset + value.bits() <= self.bits());
    let mut result = self.clone();
    limbs::copy_bits( result.as_slice_mut(), offset
                    , value.as_slice(), 0, value.bits());
    result
  }

  /// Remove the least significant bit.  Inverse of `join_bit`.
  pub fn split_lsb(&self) -> (BitWord, bool) {
    assert!(self.bits() > 0);
    (self.drop_lsb(), self.index_lsb(0))
  }

  /// All bits except the least significant one.
  pub fn drop_lsb(&self) -> BitWord {
    assert!(self.bits() > 0);
    self.high(self.bits() - 1)
  }

  /// Remove the most significant bit.  Inverse of `join_msb`.
  pub fn split_msb(&self) -> (bool, BitWord) {
    assert!(self.bits() > 0);
    (self.index_msb(0), self.drop_msb())
  }

  /// All bits except the most significant one.
  pub fn drop_msb(&self) -> BitWord {
    assert!(self.bits() > 0);
    self.low(self.bits() - 1)
  }

  /// Split in two, with `upper` bits in the first part.
  /// Inverse of `concat`.
  pub fn split2(&self, upper: usize) -> (BitWord, BitWord) {
    assert!(upper <= self.bits());
    (self.high(upper), self.low(self.bits() - upper))
  }

  /// Split into parts of the given sizes, which must add up to the size
  /// of the word.  The first part is the most significant one.
  /// Inverse of `join`.
  pub fn split(&self, widths: &[usize]) -> Vec<BitWord> {
    assert_eq!(widths.iter().sum::<usize>(), self.bits());
    let mut at = 0;
    widths.iter().map(|&w| {
      let part = self.sub_word_msb(w, at);
      at += w;
      part
    }).collect()
  }

  /// Split the words into sub-words of the given size.
  /// Generates only full words, so if the sub size does not divide the word
  /// exactly, the left over bits at the end will be ignored.
  pub fn iter_words<INDEX: IndexDir>(&self, each: usize) -> TraverseWords<'_,INDEX> {
    TraverseWords { dir: PhantomData, vec: self, index: 0, each: each }
  }

  /// Split the words into sub-words of the given size, starting at the
  /// most significant end.
  pub fn iter_words_msb(&self, each: usize) -> TraverseWords<'_,FromMSB>
    { self.iter_words(each) }

  /// Split the words into sub-words of the given size, starting at the
  /// least significant end.
  pub fn iter_words_lsb(&self, each: usize) -> TraverseWords<'_,FromLSB>
    { self.iter_words(each) }
}


#[derive(Clone)]
pub struct TraverseWords<'a, INDEX: IndexDir> {
  dir:   PhantomData<INDEX>,
  vec:   &'a BitWord,
  index: usize,
  each:  usize
}

impl<'a, INDEX: IndexDir> Iterator for TraverseWords<'a, INDEX> {
  type Item = BitWord;
  fn next(&mut self) -> Option<Self::Item> {
    let index = self.index;
    let each  = self.each;
    if each == 0 || index + each > self.vec.bits() { return None }
    self.index += each;
    Some(self.vec.sub_word::<INDEX>(each, index))
  }
}



#[cfg(test)]
mod test {
  use crate::{BitWord,FromLSB,FromMSB,IndexDir,IndexFrom};
  use crate::proptest::*;

  fn sub_word<INDEX: IndexDir>() {
    do_test(word_and2::<usize,usize>, |(x,i0,w0): (BitWord,usize,usize)|{
      let i      = i0 % (x.bits() + 1);
      let have   = x.bits() - i;
      let w      = w0 % (have + 1);
      let (xr,a) = x.sem();

      let lhs    = xr.sub_word::<INDEX>(w,i);
      let amt    = match INDEX::DIR {
                    IndexFrom::Msb => x.bits() - i - w,
                    IndexFrom::Lsb => i
                  };
      Some(lhs == BitWord::from_nat(w, &(a >> amt)))
    })
  }

  #[test]
  fn sub_word_lsb() { sub_word::<FromLSB>() }
  #[test]
  fn sub_word_msb() { sub_word::<FromMSB>() }

  #[test]
  fn split2_concat() {
    do_test(two_words, |(x,y): (BitWord,BitWord)| {
      let (a,b) = x.concat(&y).split2(x.bits());
      Some(a == x && b == y)
    })
  }

  #[test]
  fn split_join() {
    do_test(word_and2::<u8,u8>, |(x,p,q): (BitWord,u8,u8)| {
      let n  = x.bits();
      let w1 = (p as usize) % (n + 1);
      let w2 = (q as usize) % (n - w1 + 1);
      let widths = [w1, w2, n - w1 - w2];
      let parts  = x.split(&widths);
      Some(  parts.iter().map(|w| w.bits()).collect::<Vec<_>>() == widths
          && BitWord::join(&parts) == x)
    })
  }

  #[test]
  fn slice_update() {
    do_test(word_and2::<usize,usize>, |(x,o0,w0): (BitWord,usize,usize)| {
      let off = o0 % (x.bits() + 1);
      let w   = w0 % (x.bits() - off + 1);
      let v   = BitWord::ones(w);
      let y   = x.update_slice(off, &v);
      Some(  y.slice(off, w) == v
          && y.low(off) == x.low(off)
          && y.high(x.bits() - off - w) == x.high(x.bits() - off - w))
    })
  }

  #[test]
  fn split_lsb_msb() {
    do_test(word_and::<bool>, |(x,b): (BitWord,bool)| {
      let (h,l) = BitWord::join_msb((b, x.clone())).split_msb();
      let (u,c) = x.cons(b).split_lsb();
      Some(h == b && l == x && u == x && c == b)
    })
  }

  #[test]
  fn test_iter_words() {
    let x = BitWord::from_u64(12, 0xABC);
    let msb: Vec<_> = x.iter_words_msb(4).map(|w| w.to_u64()).collect();
    let lsb: Vec<_> = x.iter_words_lsb(5).map(|w| w.to_u64()).collect();
    assert_eq!(msb, [0xA, 0xB, 0xC]);
    assert_eq!(lsb, [0x1C, 0x15]);
    assert_eq!(x.iter_words_msb(0).count(), 0);
  }

  #[test]
  fn test_drop() {
    let x = BitWord::from_u64(4, 0b1011);
    assert_eq!(x.drop_lsb(), BitWord::from_u64(3, 0b101));
    assert_eq!(x.drop_msb(), BitWord::from_u64(3, 0b011));
    assert_eq!(x.high(0), BitWord::zero(0));
  }
}
