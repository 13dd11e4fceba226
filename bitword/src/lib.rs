//! Words of dynamic sizes.
//!
//! A `BitWord` is a sequence of bits whose size is chosen at run time and
//! then stays fixed.  Bit 0 is the least significant bit.  The `limbs`
//! module has the bit level operations on the underlying representation,
//! which are shared with the fixed size words of the `vmword` crate.

pub mod limbs;
pub mod core;
pub mod error;
pub mod display;
pub mod cmp;
pub mod index;
pub mod iter_bits;
pub mod conversion;
pub mod residue;
pub mod join;
pub mod split;
pub mod extend;
pub mod text;

#[cfg(test)]
pub mod proptest;

pub use crate::core::BitWord;
pub use crate::error::WordError;
pub use crate::residue::Residue;
pub use crate::index::{IndexDir,IndexFrom,FromLSB,FromMSB};
