use crate::BitWord;
use crate::limbs::{LimbT,limbs_for_size};
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

impl ValueTree for BitWord {
  type Value = BitWord;

  fn current(&self) -> BitWord { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

#[derive(Debug)]
pub struct BitWordStrategy { pub bits: usize }

impl Strategy for BitWordStrategy {
  type Tree  = BitWord;
  type Value = BitWord;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let n = limbs_for_size(self.bits);
    let mut limbs = Vec::<LimbT>::with_capacity(n);
    let rng = runner.rng();

    // Bias some limbs towards all 0s or all 1s so that the sign
    // and truncation checks see interesting cases.
    let fill = rand::Rng::gen_range(&mut *rng, 0 .. 4_u32);
    for _ in 0 .. n {
      limbs.push(match fill {
        0 => 0,
        1 => !0,
        _ => rng.next_u64()
      })
    }
    if fill < 2 && n > 0 { limbs[0] = rng.next_u64() }
    Ok(BitWord::from_limbs(self.bits,limbs))
  }
}

impl Arbitrary for BitWord {
  type Parameters = usize;
  type Strategy   = BitWordStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    BitWordStrategy { bits: bits }
  }
}


/// Largest width exercised by `do_test`.
pub const MAX_TEST_BITS: usize = 260;

/// Test cases per width in `do_test`.
pub const CASES_PER_WIDTH: u32 = 64;

/// A runner that does not try to save failures to files.
pub fn runner() -> TestRunner { runner_with(Config::default().cases) }

pub fn runner_with(cases: u32) -> TestRunner {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  cfg.cases = cases;
  TestRunner::new(cfg)
}

pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for bits in 0 ..= MAX_TEST_BITS {
    let mut runner = runner_with(CASES_PER_WIDTH);
    let strategy = s(bits);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail(format!("unexpected result at {} bits", bits).into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl BitWord {
  pub fn sem(&self) -> (&BitWord, num::BigUint) {
    (self, self.to_nat())
  }
}

pub fn pow2(bits: usize) -> num::BigUint {
  num::BigUint::from(1_u64) << bits
}

pub fn binary(bits: usize) -> StrategyFor<(BitWord,BitWord)> {
  arbitrary_with((bits,bits))
}

pub fn unary(bits: usize) -> StrategyFor<BitWord> {
  arbitrary_with(bits)
}

/// Two words whose widths add up to `bits`.
pub fn two_words(bits: usize) -> StrategyFor<(BitWord,BitWord)> {
  let upper = bits / 3;
  arbitrary_with((upper, bits - upper))
}

pub fn word_and<T>(bits: usize) -> StrategyFor<(BitWord,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,()))
}

pub fn word_and2<S,T>(bits: usize) -> StrategyFor<(BitWord,S,T)>
  where
  S: Arbitrary<Parameters=()> ,
  T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,(),()))
}
