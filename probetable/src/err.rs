//! Error types for the `probetable` crate

/// Errors applicable to constructing and operating a fixed-capacity table
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A table must hold at least one slot.
    ///
    /// Construction is refused outright; the backing region is untouched.
    #[error("table capacity must be at least 1")]
    Capacity,

    /// The requested record width is below the configured minimum.
    ///
    /// The minimum defaults to one value field per record and can be raised
    /// through the builder for callers with wider record conventions.
    #[error("item width {got} is below the configured minimum of {min}")]
    ItemWidth {
        /// Requested number of value fields per record
        got: usize,
        /// Configured minimum number of value fields per record
        min: usize,
    },

    /// The backing region does not match the table's word count.
    ///
    /// A region must hold exactly the header plus `capacity` records; an
    /// oversized region is refused as well, since slack words would never
    /// be reachable through the layout.
    #[error("backing region holds {got} words but the layout needs exactly {need}")]
    RegionSize {
        /// Words the layout requires
        need: usize,
        /// Words the supplied region holds
        got: usize,
    },

    /// A raw byte buffer could not be adopted as a word region.
    ///
    /// The buffer is either misaligned for 64-bit words or not a whole
    /// number of words long.
    #[error("byte region is not aligned and sized for 64-bit words")]
    RegionCast,

    /// A values slice does not match the table's record width.
    ///
    /// Passing the wrong width is a caller bug, reported before any slot
    /// is touched.
    #[error("value slice holds {got} fields but records are {expected} wide")]
    ValueWidth {
        /// Value fields per record fixed at construction
        expected: usize,
        /// Value fields supplied by the caller
        got: usize,
    },

    /// Insert probed every slot and found all of them occupied.
    ///
    /// The table is left unchanged. The caller decides whether to fail,
    /// retry elsewhere, or rebuild with a larger capacity.
    #[error("no open slot left after probing the entire table")]
    Full,

    /// Delete found no occupied slot matching the key.
    ///
    /// A negative result rather than a failure; the table is not mutated.
    #[error("no occupied slot matches the key")]
    NotFound,
}
