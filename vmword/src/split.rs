use std::marker::PhantomData;
use bitword::limbs;
use bitword::{IndexDir,IndexFrom,FromLSB,FromMSB};
use crate::word::Word;
use crate::size::{Sum,Sum3,Sum4,Product,AtMost};

impl<const W: usize, const L: usize> Word<W,L> {

  /// Extract a sub-word of the given length, starting at the given
  /// position. 0 is the least significant bit.
  pub fn slice_le<const W1: usize, const L1: usize>(&self, i: usize) -> Word<W1,L1> {
    assert!((i + W1) <= W);
    let mut result = Word::<W1,L1>::zero();
    limbs::copy_bits(&mut result.0, 0, &self.0, i, W1);
    result
  }

  /// Extract a sub-word of the given length, starting at the given
  /// position. 0 is the most significant bit.
  pub fn slice_be<const W1: usize, const L1: usize>(&self, i: usize) -> Word<W1,L1> {
    assert!((i + W1) <= W);
    self.slice_le(W - W1 - i)
  }

  /// The most significant bits.  The parameters are the size of the result.
  pub fn high<const W1: usize, const L1: usize>(&self) -> Word<W1,L1> {
    let () = AtMost::<W1, W>::OK;
    self.slice_be(0)
  }

  /// The least significant bits.  Note that the parameters are the size
  /// of the result, NOT how much to drop.
  pub fn low<const W1: usize, const L1: usize>(&self) -> Word<W1,L1> {
    let () = AtMost::<W1, W>::OK;
    self.slice_le(0)
  }

  /// Replace the bits that have `offset` bits below them with `value`.
  /// All other bits are kept.
  pub fn update_slice<const W1: usize, const L1: usize>
    (&self, offset: usize, value: &Word<W1,L1>) -> Self {
    assert!((offset + W1) <= W);
    let mut result = *self;
    limbs::copy_bits(&mut result.0, offset, &value.0, 0, W1);
    result
  }

  /// Remove the least significant bit.  Inverse of `join_bit`.
  pub fn split_lsb<const WO: usize, const LO: usize>(&self) -> (Word<WO,LO>, bool) {
    (self.drop_lsb(), self.lsb())
  }

  /// All bits except the least significant one.
  pub fn drop_lsb<const WO: usize, const LO: usize>(&self) -> Word<WO,LO> {
    let () = Sum::<WO, 1, W>::OK;
    self.high()
  }

  /// Remove the most significant bit.  Inverse of `join_msb`.
  pub fn split_msb<const WO: usize, const LO: usize>(&self) -> (bool, Word<WO,LO>) {
    (self.msb(), self.drop_msb())
  }

  /// All bits except the most significant one.
  pub fn drop_msb<const WO: usize, const LO: usize>(&self) -> Word<WO,LO> {
    let () = Sum::<1, WO, W>::OK;
    self.low()
  }

  /// Split in two, most significant part first.  Inverse of `concat`.
  pub fn split2< const W1: usize, const L1: usize
               , const W2: usize, const L2: usize
               >(&self) -> (Word<W1,L1>, Word<W2,L2>) {
    let () = Sum::<W1, W2, W>::OK;
    (self.high(), self.low())
  }

  /// Split in three, most significant part first.
  pub fn split3< const W1: usize, const L1: usize
               , const W2: usize, const L2: usize
               , const W3: usize, const L3: usize
               >(&self) -> (Word<W1,L1>, Word<W2,L2>, Word<W3,L3>) {
    let () = Sum3::<W1, W2, W3, W>::OK;
    (self.high(), self.slice_le(W3), self.low())
  }

  /// Split in four, most significant part first.
  pub fn split4< const W1: usize, const L1: usize
               , const W2: usize, const L2: usize
               , const W3: usize, const L3: usize
               , const W4: usize, const L4: usize
               >(&self) -> (Word<W1,L1>, Word<W2,L2>, Word<W3,L3>, Word<W4,L4>) {
    let () = Sum4::<W1, W2, W3, W4, W>::OK;
    (self.high(), self.slice_le(W3 + W4), self.slice_le(W4), self.low())
  }

  /// Split into `N` words of equal size, most significant first.
  /// For more than four parts of different sizes, convert to a `BitWord`
  /// and use `BitWord::split`.
  pub fn split_array<const N: usize, const EACH_W: usize, const EACH_L: usize>
    (&self) -> [Word<EACH_W,EACH_L>; N] {
    let () = Product::<N, EACH_W, W>::OK;
    std::array::from_fn(|i| self.slice_be(i * EACH_W))
  }

  /// Join `N` words of equal size.  The first one is the most significant.
  /// Inverse of `split_array`.
  pub fn join_array<const N: usize, const EACH_W: usize, const EACH_L: usize>
    (xs: &[Word<EACH_W,EACH_L>; N]) -> Self {
    let () = Product::<N, EACH_W, W>::OK;
    let mut result = Self::zero();
    for (i,x) in xs.iter().enumerate() {
      limbs::copy_bits(&mut result.0, W - (i + 1) * EACH_W, &x.0, 0, EACH_W);
    }
    result
  }

  /// Traverse the word as words of `EACH_W` bits, starting from the end
  /// selected by `INDEX`.  If `EACH_W` does not divide `W`, the left over
  /// bits at the other end are skipped.
  pub fn iter_words<'a, INDEX: IndexDir, const EACH_W: usize, const EACH_L: usize>
    (&'a self) -> TraverseWords<'a, INDEX, W, L, EACH_W, EACH_L> {
    TraverseWords { dir: PhantomData, vec: self, ix: 0 }
  }

  pub fn iter_words_msb<'a, const EACH_W: usize, const EACH_L: usize>
    (&'a self) -> TraverseWords<'a, FromMSB, W, L, EACH_W, EACH_L> {
    self.iter_words()
  }

  pub fn iter_words_lsb<'a, const EACH_W: usize, const EACH_L: usize>
    (&'a self) -> TraverseWords<'a, FromLSB, W, L, EACH_W, EACH_L> {
    self.iter_words()
  }
}


/// Traverse Word<W,L> as words Word<EACH_W,EACH_L>
pub
struct TraverseWords <'a, INDEX: IndexDir, const W: usize, const L: usize
                        , const EACH_W: usize, const EACH_L: usize> {
  dir: PhantomData<INDEX>,
  vec: &'a Word<W,L>,
  ix:  usize,
}

impl<'a, INDEX: IndexDir, const W:  usize, const L: usize
       , const EACH_W: usize, const EACH_L: usize>
   Iterator for TraverseWords<'a,INDEX,W,L,EACH_W,EACH_L> {

  type Item = Word<EACH_W,EACH_L>;

  fn next(&mut self) -> Option<Self::Item> {
    let todo = if EACH_W == 0 { 0 } else { W / EACH_W };
    if self.ix >= todo { return None }
    let off = self.ix * EACH_W;
    self.ix += 1;
    Some(match INDEX::DIR {
      IndexFrom::Msb => self.vec.slice_be(off),
      IndexFrom::Lsb => self.vec.slice_le(off)
    })
  }
}


#[cfg(test)]
mod tests {
  use crate::Word;

  #[test]
  fn test_slice() {
    let x64 = <Word!(64)>::from(1_u64 << 63);
    assert_eq!(x64.slice_be(0), <Word!(1)>::from(1_u64));
    assert_eq!(x64.slice_be(1), <Word!(1)>::from(0_u64));
    assert_eq!(x64.slice_be(0), <Word!(2)>::from(0b10_u64));
    assert_eq!(x64.slice_be(1), <Word!(2)>::from(0b00_u64));
    assert_eq!(x64.slice_be(0), x64);
    assert_eq!(x64.slice_le(0), <Word!(1)>::from(0_u64));
    assert_eq!(x64.slice_le(63), <Word!(1)>::from(1_u64));
    assert_eq!(x64.slice_le(0), x64);

    let x123 = <Word!(123)>::from(1_u128 << 122);
    assert_eq!(x123.slice_be(0), <Word!(1)>::from(1_u64));
    assert_eq!(x123.slice_be(1), <Word!(1)>::from(0_u64));
    assert_eq!(x123.slice_be(0), <Word!(2)>::from(0b10_u64));
    assert_eq!(x123.slice_be(0), x123);
    assert_eq!(x123.slice_le(60), <Word!(63)>::from(1_u64 << 62));
  }

  #[test]
  fn test_high_low() {
    let x = <Word!(4)>::from(0b1101_u64);
    assert_eq!(x.high::<2,1>(), <Word!(2)>::from(0b11_u64));
    assert_eq!(x.low::<3,1>(),  <Word!(3)>::from(0b101_u64));
    assert_eq!(x.update_slice(1, &<Word!(2)>::from(0b11_u64)), <Word!(4)>::from(0b1111_u64));
  }

  #[test]
  fn test_split_bits() {
    let x = <Word!(8)>::from(0b1000_0011_u64);
    let (upper, bit): (Word!(7), bool) = x.split_lsb();
    assert_eq!((upper.to_u64(), bit), (0b100_0001, true));
    let (bit, lower): (bool, Word!(7)) = x.split_msb();
    assert_eq!((bit, lower.to_u64()), (true, 0b11));
    assert_eq!(<Word!(8)>::join_bit(x.split_lsb::<7,1>()), x);
    assert_eq!(<Word!(8)>::join_msb(x.split_msb::<7,1>()), x);
    let one: Word!(1) = <Word!(1)>::ones();
    let empty: Word!(0) = one.drop_lsb();
    assert_eq!(empty, <Word!(0)>::zero());
  }

  #[test]
  fn test_split_tuples() {
    let x = <Word!(32)>::from(0x1234_5678_u64);
    let (a, b): (Word!(12), Word!(20)) = x.split2();
    assert_eq!((a.to_u64(), b.to_u64()), (0x123, 0x45678));
    let (a, b, c): (Word!(8), Word!(16), Word!(8)) = x.split3();
    assert_eq!((a.to_u64(), b.to_u64(), c.to_u64()), (0x12, 0x3456, 0x78));
    let (a, b, c, d): (Word!(4), Word!(4), Word!(8), Word!(16)) = x.split4();
    assert_eq!( (a.to_u64(), b.to_u64(), c.to_u64(), d.to_u64())
              , (0x1, 0x2, 0x34, 0x5678));
    let y: Word!(32) = a.concat::<4,1,8,1>(&b).concat::<8,1,16,1>(&c).concat(&d);
    assert_eq!(y, x);
  }

  #[test]
  fn test_split_array() {
    let x = <Word!(64)>::from(0x_00_01_02_03_04_05_06_07_u64);
    let parts: [Word!(4); 16] = x.split_array();
    assert_eq!( parts.iter().map(|p| p.to_u64()).collect::<Vec<_>>()
              , vec![0_u64,0,0,1,0,2,0,3,0,4,0,5,0,6,0,7]);
    assert_eq!(<Word!(64)>::join_array(&parts), x);

    let bytes: [Word!(8); 8] = x.split_array();
    assert_eq!(bytes[7].to_u64(), 7);
    assert_eq!(<Word!(64)>::join_array(&bytes), x);

    let addr = <Word!(160)>::ones().set_bit(0, false);
    let parts20: [Word!(8); 20] = addr.split_array();
    assert_eq!(parts20[19].to_u64(), 0xFE);
    assert_eq!(<Word!(160)>::join_array(&parts20), addr);
  }

  #[test]
  fn test_iter_words() {
    let x = <Word!(12)>::from(0xABC_u64);
    let ws: Vec<Word!(4)> = x.iter_words_msb().collect();
    assert_eq!(ws.iter().map(|w| w.to_u64()).collect::<Vec<_>>(), vec![0xA, 0xB, 0xC]);
    let ws: Vec<Word!(5)> = x.iter_words_lsb().collect();
    assert_eq!(ws.iter().map(|w| w.to_u64()).collect::<Vec<_>>(), vec![0x1C, 0x15]);
    let ws: Vec<Word!(5)> = x.iter_words_msb().collect();
    assert_eq!(ws.iter().map(|w| w.to_u64()).collect::<Vec<_>>(), vec![0x15, 0x0F]);
    assert_eq!(<Word!(0)>::zero().iter_words_msb::<0,0>().count(), 0);
  }
}
