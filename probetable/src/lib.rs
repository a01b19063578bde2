#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::implicit_clone)]
#![warn(clippy::manual_ok_or)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]

mod err;
mod hash;
mod key;
mod layout;
mod slot;
mod table;

use crate::layout::Layout;

pub use err::Error;
pub use hash::{HashStrategy, Scrambler};
pub use key::Key;
pub use layout::words_of_bytes;
pub use slot::{Record, Slot, SlotIndex};
pub use table::{Dump, ProbeTable, Region, Slots};

/// Builder for [`ProbeTable`] instances with custom settings
///
/// Capacity and item width are the required parameters; the hash seed,
/// hash strategy, and minimum item width have defaults. `build` allocates
/// owned backing memory, `build_in` places the table over a caller-supplied
/// word region instead.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProbeTableBuilder {
    /// Number of slots
    pub(crate) capacity: usize,
    /// Value fields per record
    pub(crate) item_width: usize,
    /// Seed fixing every hash parameter, and with it the probe sequence
    pub(crate) seed: u64,
    /// Selected hash strategy
    pub(crate) strategy: HashStrategy,
    /// Smallest accepted item width
    pub(crate) min_item_width: usize,
}

impl ProbeTableBuilder {
    /// Create a builder with default settings: murmur hashing, zero seed,
    /// minimum item width of one.
    pub fn new(capacity: usize, item_width: usize) -> Self {
        Self {
            capacity,
            item_width,
            seed: 0,
            strategy: HashStrategy::default(),
            min_item_width: 1,
        }
    }

    /// Select the seed the hash parameters are derived from.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Select a hash strategy.
    pub fn strategy(&mut self, strategy: HashStrategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Raise the smallest accepted item width.
    ///
    /// For callers whose record conventions reserve a wider payload;
    /// values below one are treated as one.
    pub fn min_item_width(&mut self, min: usize) -> &mut Self {
        self.min_item_width = min;
        self
    }

    /// Build a table over freshly allocated owned memory.
    ///
    /// The configuration is validated before anything is allocated.
    pub fn build<K: Key>(&self) -> Result<ProbeTable<K>, Error> {
        let layout = Layout::new(self.capacity, self.item_width, self.min_item_width)?;
        ProbeTable::with_builder_in(self, layout.alloc())
    }

    /// Build a table over a caller-supplied word region.
    ///
    /// The region must hold exactly the table's word count; it is stamped
    /// with the header and reset on success and untouched on failure. Raw
    /// byte buffers can be adopted first through [`words_of_bytes`].
    pub fn build_in<K: Key, M: Region>(&self, region: M) -> Result<ProbeTable<K, M>, Error> {
        ProbeTable::with_builder_in(self, region)
    }
}
