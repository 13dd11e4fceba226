use crate::BitWord;
use crate::limbs::{self, LimbT};
use std::fmt;

pub const UPPER_DIGITS: [char; 16] = [ '0','1','2','3','4','5','6','7','8','9'
                                     , 'A','B','C','D','E','F' ];

pub const LOWER_DIGITS: [char; 16] = [ '0','1','2','3','4','5','6','7','8','9'
                                     , 'a','b','c','d','e','f' ];

/// Render the bits of a limb slice `each` bits at a time, most significant
/// digit first.  If `bits` is not a multiple of `each`, the first digit
/// has the left over bits.
pub fn render_limbs(ws: &[LimbT], bits: usize, each: usize, table: &[char]) -> String {
  let mut s     = String::with_capacity(bits / each + 1);
  let mut top   = bits;
  let extra     = bits % each;
  let mut emit  = |x: LimbT| s.push(table[ x as usize ]);

  if extra > 0 {
    top -= extra;
    emit(limbs::read_bits(ws, top, extra))
  }

  while top > 0 {
    top -= each;
    emit(limbs::read_bits(ws, top, each))
  }
  s
}

pub(crate) fn render_digits(x: &BitWord, each: usize, table: &[char]) -> String {
  render_limbs(x.as_slice(), x.bits(), each, table)
}

impl fmt::Binary for BitWord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = render_digits(self, 1, &UPPER_DIGITS);
    if s.is_empty() { s.push('0') } // special case so that we see something.
    f.pad_integral(true, "0b", &s)
  }
}

impl fmt::Octal for BitWord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0o", &render_digits(self, 3, &UPPER_DIGITS))
  }
}

impl fmt::UpperHex for BitWord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &render_digits(self, 4, &UPPER_DIGITS))
  }
}

impl fmt::LowerHex for BitWord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &render_digits(self, 4, &LOWER_DIGITS))
  }
}

/// Base 10.
impl fmt::Display for BitWord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "", &self.to_nat().to_string())
  }
}

impl fmt::Debug for BitWord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "BitWord<{}>({:#X})", self.bits(), self)
  }
}
