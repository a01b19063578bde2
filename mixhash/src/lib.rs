//! Murmur-style mixing hashes.
//!
//! Both variants consume an arbitrary byte slice and a seed, fold the input
//! in fixed-size chunks with a multiply/xor-shift round per chunk, absorb
//! any tail bytes, and finish with an avalanche pass. Identical inputs
//! always produce identical outputs.

mod murmur32;
mod murmur64;

pub fn murmur32(data: &[u8], seed: u32) -> u32 {
    murmur32::murmur32(data, seed)
}

pub fn murmur64(data: &[u8], seed: u64) -> u64 {
    murmur64::murmur64(data, seed)
}
