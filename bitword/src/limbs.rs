// Bit level operations on little endian limb slices.
//
// These work on the representation shared by `BitWord` and the fixed size
// words of `vmword`: limb 0 holds the least significant bits, and all bits
// at positions >= the width of the word are 0.  Reads past the end of a
// slice produce 0s, so callers may pass slices with extra zero limbs.

pub type LimbT = u64;
pub struct Limb();

impl Limb {
  /// The number of bits in a limb.
  pub const BITS: usize = LimbT::BITS as usize;
}

/// How many limbs we need to store the given number of bits.
pub const fn limbs_for_size(bits: usize) -> usize {
  (bits + Limb::BITS - 1) / Limb::BITS
}

/// A limb with the `n` least significant bits set.  `n <= Limb::BITS`.
pub fn low_mask(n: usize) -> LimbT {
  if n >= Limb::BITS { !0 } else { (1 << n) - 1 }
}

/// Read the bit at position `i`.
pub fn get_bit(ws: &[LimbT], i: usize) -> bool {
  match ws.get(i / Limb::BITS) {
    Some(&w) => (w >> (i % Limb::BITS)) & 1 == 1,
    None     => false
  }
}

/// Set the bit at position `i`, which must be within the slice.
pub fn set_bit(ws: &mut [LimbT], i: usize, value: bool) {
  let bit = 1 << (i % Limb::BITS);
  if value { ws[i / Limb::BITS] |= bit } else { ws[i / Limb::BITS] &= !bit }
}

/// Read `n <= Limb::BITS` bits starting at bit `off`.
/// The result is in the least significant bits.
pub fn read_bits(ws: &[LimbT], off: usize, n: usize) -> LimbT {
  if n == 0 { return 0 }
  let i   = off / Limb::BITS;
  let sh  = off % Limb::BITS;
  let mut w = ws.get(i).copied().unwrap_or(0) >> sh;
  if sh > 0 && sh + n > Limb::BITS {
    w |= ws.get(i + 1).copied().unwrap_or(0) << (Limb::BITS - sh);
  }
  w & low_mask(n)
}

/// Overwrite `n <= Limb::BITS` bits starting at bit `off` with the
/// least significant bits of `value`.
pub fn write_bits(ws: &mut [LimbT], off: usize, n: usize, value: LimbT) {
  if n == 0 { return }
  let mask  = low_mask(n);
  let value = value & mask;
  let i     = off / Limb::BITS;
  let sh    = off % Limb::BITS;

  ws[i] = (ws[i] & !(mask << sh)) | (value << sh);

  if sh > 0 && sh + n > Limb::BITS {
    let done = Limb::BITS - sh;
    ws[i + 1] = (ws[i + 1] & !(mask >> done)) | (value >> done);
  }
}

/// Copy `len` bits from `src` (starting at `src_off`) into `dst`
/// (starting at `dst_off`).  Other bits of `dst` are not changed.
pub fn copy_bits( dst: &mut [LimbT], dst_off: usize
                , src: &[LimbT],     src_off: usize
                , len: usize
                ) {
  let mut done = 0;
  while done < len {
    let n = (len - done).min(Limb::BITS);
    write_bits(dst, dst_off + done, n, read_bits(src, src_off + done, n));
    done += n;
  }
}

/// Set `len` bits starting at `off` to `value`.
pub fn fill_bits(ws: &mut [LimbT], off: usize, len: usize, value: bool) {
  let w: LimbT = if value { !0 } else { 0 };
  let mut done = 0;
  while done < len {
    let n = (len - done).min(Limb::BITS);
    write_bits(ws, off + done, n, w);
    done += n;
  }
}

/// Are all `len` bits starting at `off` equal to `value`?
pub fn all_bits(ws: &[LimbT], off: usize, len: usize, value: bool) -> bool {
  let mut done = 0;
  while done < len {
    let n      = (len - done).min(Limb::BITS);
    let expect = if value { low_mask(n) } else { 0 };
    if read_bits(ws, off + done, n) != expect { return false }
    done += n;
  }
  true
}

/// Clear all bits at positions `>= bits`.
pub fn fix_overflow(ws: &mut [LimbT], bits: usize) {
  let full = bits / Limb::BITS;
  let used = bits % Limb::BITS;
  for (i,w) in ws.iter_mut().enumerate() {
    if i > full || (i == full && used == 0) { *w = 0 }
    else if i == full { *w &= low_mask(used) }
  }
}

/// The number of 0 bits above the most significant 1 bit,
/// for a word of the given width.
pub fn leading_zeros(ws: &[LimbT], bits: usize) -> usize {
  let mut i = bits;
  while i > 0 {
    if get_bit(ws, i - 1) { return bits - i }
    i -= 1;
  }
  bits
}

/// Convert to a vector of digits in base 2^32.
/// Least significant digit first.
/// Convenient for conversion to bignum.
pub fn as_vec_u32(ws: &[LimbT]) -> Vec<u32> {
  let mut result = Vec::<u32>::with_capacity(2 * ws.len());
  for &w in ws {
    result.push(w as u32);
    result.push((w >> 32) as u32);
  }
  result
}

/// Store the least significant digits of `n` into `ws`, then clear
/// everything above `bits`.
pub fn store_uint(ws: &mut [LimbT], bits: usize, n: &num::BigUint) {
  for w in ws.iter_mut() { *w = 0 }
  for (w,d) in ws.iter_mut().zip(n.iter_u64_digits()) { *w = d }
  fix_overflow(ws, bits);
}
