//! Key types storable in one table word
//!
//! The slot layout reserves a single 64-bit word for the key, so a key type
//! is any unsigned integer that widens losslessly into that word and can be
//! recovered from it. The trait is blanket-implemented; `u8` through `u64`
//! all qualify.

use bytemuck::Pod;
use num_traits::{FromPrimitive, Unsigned};
use std::fmt::Debug;

/// Fixed-width unsigned keys, stored widened into one table word
pub trait Key: Copy + Eq + Debug + Pod + Unsigned + Into<u64> + FromPrimitive {
    /// Widen this key to its stored word.
    #[inline(always)]
    fn to_word(self) -> u64 {
        self.into()
    }

    /// Recover a key from its stored word.
    ///
    /// Only words produced by [`Key::to_word`] are ever stored, so the
    /// narrowing always succeeds.
    #[inline(always)]
    fn from_word(word: u64) -> Self {
        Self::from_u64(word).expect("stored key word always fits the key type")
    }

    /// Byte view of the key, fed to the mixing hash strategy.
    #[inline(always)]
    fn bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Copy + Eq + Debug + Pod + Unsigned + Into<u64> + FromPrimitive> Key for T {}
