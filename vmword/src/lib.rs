//! Fixed size words for the machine word model.
//!
//! `Word<W,L>` is a word of `W` bits stored in `L` limbs; write it as
//! `Word!(W)`.  Operations that change the size of a word take the size
//! of the result as a parameter, and mistakes in the sizes are reported
//! at compile time.  See the `bitword` crate for words whose size is
//! only known at run time.

pub mod size;
pub mod word;
pub mod split;
pub mod extend;
pub mod dynamic;
pub mod text;
pub mod kinds;
pub mod bytes;

pub use word::Word;
pub use kinds::*;
pub use bytes::{bytes_to_hex,pack_bytes,unpack_bytes};
pub use bitword::{BitWord,WordError,Residue};
