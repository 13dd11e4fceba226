// Checks on the sizes of fixed size words.
//
// Stable Rust can't compute a type such as `Word<{W + 1}, _>`, so
// operations that change the size of a word take the size of the result
// as a parameter, and use these constants to check that the sizes are
// consistent.  The checks happen when a function is instantiated,
// so a mistake is a compile time error, e.g.:
//
//   let () = Sum::<W, 1, WO>::OK;

/// `A + B == C`
pub struct Sum<const A: usize, const B: usize, const C: usize>;

impl<const A: usize, const B: usize, const C: usize> Sum<A,B,C> {
  pub const OK: () = assert!(A + B == C, "word sizes do not add up");
}

/// `A + B + C == D`
pub struct Sum3<const A: usize, const B: usize, const C: usize, const D: usize>;

impl<const A: usize, const B: usize, const C: usize, const D: usize>
  Sum3<A,B,C,D> {
  pub const OK: () = assert!(A + B + C == D, "word sizes do not add up");
}

/// `A + B + C + D == E`
pub struct Sum4< const A: usize, const B: usize, const C: usize
               , const D: usize, const E: usize>;

impl<const A: usize, const B: usize, const C: usize, const D: usize, const E: usize>
  Sum4<A,B,C,D,E> {
  pub const OK: () = assert!(A + B + C + D == E, "word sizes do not add up");
}

/// `N * EACH == TOTAL`
pub struct Product<const N: usize, const EACH: usize, const TOTAL: usize>;

impl<const N: usize, const EACH: usize, const TOTAL: usize>
  Product<N,EACH,TOTAL> {
  pub const OK: () = assert!(N * EACH == TOTAL, "parts do not cover the word");
}

/// `A <= B`
pub struct AtMost<const A: usize, const B: usize>;

impl<const A: usize, const B: usize> AtMost<A,B> {
  pub const OK: () = assert!(A <= B, "word is too large");
}
