//! Hash strategies driving the probe sequence
//!
//! A strategy maps a key to a probe start index in `[0, capacity)`. Every
//! parameter a strategy uses is derived from the construction seed exactly
//! once and stored with the table, so the start index is a pure function of
//! `(key, seed, capacity)` and the probe sequence of a key can be replayed
//! by any later operation.

use crate::key::Key;

/// Strategy selector accepted by [`crate::ProbeTableBuilder`]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum HashStrategy {
    /// Multiplicative scrambling of the key word, see [`Scrambler`]
    Multiplicative,
    /// 64-bit murmur mixing over the key bytes, the recommended default
    #[default]
    Murmur64,
}

/// Low end of the derived shift range
const MIN_SHIFT: u32 = 33;
/// Number of distinct shift amounts, covering `33..=47`
const SHIFT_SPAN: u64 = 15;

/// Splitmix-style generator expanding one seed into derivation words
struct SeedSequence(u64);

impl SeedSequence {
    /// Next derivation word.
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Multiplicative scrambler with parameters fixed per table instance
///
/// The key word is multiplied by a large odd multiplier and the product's
/// high bits are kept before range reduction. Multiplier and shift are
/// derived from the seed at construction time and stored; they never change
/// for the lifetime of the table, which is what makes previously inserted
/// keys reachable on every later probe.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Scrambler {
    /// Odd 64-bit multiplier
    multiplier: u64,
    /// Right shift applied to the product, in `33..=47`
    shift: u32,
}

impl Scrambler {
    /// Derive a scrambler from a seed.
    pub fn from_seed(seed: u64) -> Self {
        let mut seq = SeedSequence(seed);
        let multiplier = seq.next() | 1;
        let shift = MIN_SHIFT + (seq.next() % SHIFT_SPAN) as u32;
        Self { multiplier, shift }
    }

    /// The derived multiplier.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// The derived shift amount.
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Probe start index for a key word, in `[0, capacity)`.
    #[inline(always)]
    pub fn probe_start(&self, key_word: u64, capacity: u64) -> u64 {
        (key_word.wrapping_mul(self.multiplier) >> self.shift) % capacity
    }
}

/// Resolved hash state stored inside a table
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum ProbeHasher {
    /// Multiplicative scrambling over the key word
    Scramble(Scrambler),
    /// Murmur mixing over the key bytes with a fixed seed
    Murmur {
        /// Seed fixed at construction
        seed: u64,
    },
}

impl ProbeHasher {
    /// Resolve a selector and seed into stored hash state.
    pub(crate) fn new(strategy: HashStrategy, seed: u64) -> Self {
        match strategy {
            HashStrategy::Multiplicative => Self::Scramble(Scrambler::from_seed(seed)),
            HashStrategy::Murmur64 => Self::Murmur { seed },
        }
    }

    /// Probe start index for a key, in `[0, capacity)`.
    #[inline(always)]
    pub(crate) fn probe_start<K: Key>(&self, key: K, capacity: u64) -> u64 {
        match self {
            Self::Scramble(scrambler) => scrambler.probe_start(key.to_word(), capacity),
            Self::Murmur { seed } => mixhash::murmur64(key.bytes(), *seed) % capacity,
        }
    }
}
