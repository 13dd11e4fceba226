use std::ops::{Add,Sub,Neg,Mul};
use crate::BitWord;

/// An element of the integers modulo `2^bits`.
/// The value is always reduced, i.e., less than the modulus.
#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub struct Residue {
  bits:  usize,
  value: num::BigUint
}

impl Residue {

  /// The residue class of `value`.
  pub fn new(bits: usize, value: &num::BigUint) -> Residue {
    Residue { bits: bits, value: value % Self::modulus_for(bits) }
  }

  fn modulus_for(bits: usize) -> num::BigUint {
    num::BigUint::from(1_u64) << bits
  }

  /// The number of bits in the modulus, `2^bits`.
  pub fn bits(&self) -> usize { self.bits }

  pub fn modulus(&self) -> num::BigUint { Self::modulus_for(self.bits) }

  /// The canonical representative, in `0 .. 2^bits`.
  pub fn value(&self) -> &num::BigUint { &self.value }

  /// Raise the number to the given power.
  pub fn pow(&self, exp: u32) -> Residue {
    let value = self.value.modpow(&exp.into(), &self.modulus());
    Residue { bits: self.bits, value: value }
  }
}

impl BitWord {

  /// The value of the word, as an element of `Z/2^bits`.
  pub fn to_residue(&self) -> Residue {
    Residue { bits: self.bits(), value: self.to_nat() }
  }

  /// Encode a residue.  The width of the result is the width of the
  /// residue's modulus.
  pub fn from_residue(x: &Residue) -> BitWord {
    BitWord::from_nat(x.bits(), x.value())
  }
}

impl From<&Residue> for BitWord {
  fn from(x: &Residue) -> Self { BitWord::from_residue(x) }
}

impl From<&BitWord> for Residue {
  fn from(x: &BitWord) -> Self { x.to_residue() }
}


impl Add for &Residue {
  type Output = Residue;

  fn add(self, other: &Residue) -> Self::Output {
    assert_eq!(self.bits, other.bits);
    Residue::new(self.bits, &(&self.value + &other.value))
  }
}

impl Neg for &Residue {
  type Output = Residue;

  fn neg(self) -> Self::Output {
    let modulus = self.modulus();
    Residue::new(self.bits, &(modulus - &self.value))
  }
}

impl Sub for &Residue {
  type Output = Residue;

  fn sub(self, other: &Residue) -> Self::Output {
    self + &(-other)
  }
}

impl Mul for &Residue {
  type Output = Residue;

  fn mul(self, other: &Residue) -> Self::Output {
    assert_eq!(self.bits, other.bits);
    Residue::new(self.bits, &(&self.value * &other.value))
  }
}


#[cfg(test)]
mod test {
  use crate::{BitWord,Residue};
  use crate::proptest::*;

  #[test]
  fn residue_round_trip() {
    do_test(unary, |x: BitWord| {
      let r = x.to_residue();
      Some(r.value() == &x.to_nat() && BitWord::from_residue(&r) == x)
    })
  }

  #[test]
  fn add_sub() {
    do_test(binary, |(x,y): (BitWord,BitWord)| {
      let (a,b) = (x.to_residue(), y.to_residue());
      let expect = (x.to_nat() + y.to_nat()) % pow2(x.bits());
      Some(  (&a + &b).value() == &expect
          && &(&a + &b) - &b == a
          && &a + &(-&a) == Residue::new(x.bits(), &0_u64.into()))
    })
  }

  #[test]
  fn mul_pow() {
    do_test(unary, |x: BitWord| {
      let a = x.to_residue();
      Some(&(&a * &a) * &a == a.pow(3))
    })
  }

  #[test]
  fn test_new_reduces() {
    let r = Residue::new(8, &300_u64.into());
    assert_eq!(r.value(), &num::BigUint::from(44_u64));
    assert_eq!(BitWord::from(&r), BitWord::from_u64(8, 44));
    assert_eq!((-&r).value(), &num::BigUint::from(212_u64));
  }
}
