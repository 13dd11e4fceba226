use crate::BitWord;
use crate::limbs;

impl BitWord {

  /// Join two words.  `self` provides the most significant bits of the
  /// result and `lower` the least significant ones.
  pub fn concat(&self, lower: &BitWord) -> BitWord {
    if self.bits() == 0 { return lower.clone() }
    if lower.bits() == 0 { return self.clone() }

    let mut result = BitWord::zero(self.bits() + lower.bits());
    let out        = result.as_slice_mut();
    limbs::copy_bits(out, 0, lower.as_slice(), 0, lower.bits());
    limbs::copy_bits(out, lower.bits(), self.as_slice(), 0, self.bits());
    result
  }

  /// Join a sequence of words.  The first word ends up in the most
  /// significant position.
  pub fn join<'a>(parts: impl IntoIterator<Item = &'a BitWord>) -> BitWord {
    let parts: Vec<&BitWord> = parts.into_iter().collect();
    let total: usize = parts.iter().map(|w| w.bits()).sum();

    let mut result = BitWord::zero(total);
    let out        = result.as_slice_mut();
    let mut at     = total;
    for w in parts {
      at -= w.bits();
      limbs::copy_bits(out, at, w.as_slice(), 0, w.bits());
    }
    result
  }

  /// Add a new least significant bit.
  pub fn cons(&self, bit: bool) -> BitWord {
    self.concat(&BitWord::copy(1, bit))
  }

  /// Add a new least significant bit.  Inverse of `split_lsb`.
  pub fn join_bit((upper, bit): (BitWord, bool)) -> BitWord {
    upper.cons(bit)
  }

  /// Add a new most significant bit.  Inverse of `split_msb`.
  pub fn join_msb((bit, lower): (bool, BitWord)) -> BitWord {
    BitWord::copy(1, bit).concat(&lower)
  }
}


#[cfg(test)]
mod test {
  use crate::BitWord;
  use crate::proptest::*;

  #[test]
  fn concat() {
    do_test(two_words, |(x,y): (BitWord,BitWord)| {
      let (xr,a) = x.sem();
      let (yr,b) = y.sem();
      let expect = (a << y.bits()) + b;
      Some(xr.concat(yr) == BitWord::from_nat(x.bits() + y.bits(), &expect))
    })
  }

  #[test]
  fn join_is_repeated_concat() {
    do_test(binary, |(x,y): (BitWord,BitWord)| {
      let z = BitWord::from_u64(3, 5);
      Some(BitWord::join([&x, &z, &y]) == x.concat(&z).concat(&y))
    })
  }

  #[test]
  fn cons() {
    do_test(word_and::<bool>, |(x,b): (BitWord,bool)| {
      let y = x.cons(b);
      Some(  y.bits() == x.bits() + 1
          && y.lsb() == b
          && y.to_nat() == (x.to_nat() << 1_usize) + (b as u64)
          && BitWord::join_bit((x.clone(), b)) == y)
    })
  }

  #[test]
  fn test_join_msb() {
    let x = BitWord::join_msb((true, BitWord::from_u64(3, 0b010)));
    assert_eq!(x, BitWord::from_u64(4, 0b1010));
    assert_eq!(BitWord::join_msb((false, BitWord::zero(0))), BitWord::zero(1));
  }
}
