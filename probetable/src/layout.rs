//! Word-level layout of a table over one contiguous region
//!
//! A table region is a run of `u64` words: a two-word header holding the
//! capacity and item width, followed by `capacity` fixed-width records of
//! `1 (status) + 1 (key) + item_width (values)` words each. The region can
//! be any word buffer the caller controls, which is what allows a table to
//! be placed over externally managed memory. All access goes through the
//! typed ranges computed here; no raw offsets ever reach a caller.

use crate::err::Error;
use std::ops::Range;

/// Words in the region header: capacity and item width
pub(crate) const HEADER_WORDS: usize = 2;

/// Record words preceding the value fields: status and key
pub(crate) const RECORD_OVERHEAD: usize = 2;

/// Validated shape of a table region
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Layout {
    /// Number of slots, fixed for the table's lifetime
    capacity: usize,
    /// Value fields per record, fixed for the table's lifetime
    item_width: usize,
}

impl Layout {
    /// Validate a capacity and item width into a layout.
    pub(crate) fn new(
        capacity: usize,
        item_width: usize,
        min_item_width: usize,
    ) -> Result<Self, Error> {
        if capacity < 1 {
            return Err(Error::Capacity);
        }
        let min = min_item_width.max(1);
        if item_width < min {
            return Err(Error::ItemWidth {
                got: item_width,
                min,
            });
        }
        Ok(Self {
            capacity,
            item_width,
        })
    }

    /// Number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Value fields per record.
    pub(crate) fn item_width(&self) -> usize {
        self.item_width
    }

    /// Words per record.
    pub(crate) fn record_words(&self) -> usize {
        RECORD_OVERHEAD + self.item_width
    }

    /// Words the whole region must hold.
    pub(crate) fn region_words(&self) -> usize {
        HEADER_WORDS + self.capacity * self.record_words()
    }

    /// Word range of one record within the region.
    #[inline(always)]
    pub(crate) fn record_range(&self, index: usize) -> Range<usize> {
        let start = HEADER_WORDS + index * self.record_words();
        start..start + self.record_words()
    }

    /// Stamp the header into a region and reset every slot to empty.
    ///
    /// Size is checked before the first write; a region of the wrong size
    /// is refused without any mutation.
    pub(crate) fn imprint(&self, region: &mut [u64]) -> Result<(), Error> {
        if region.len() != self.region_words() {
            return Err(Error::RegionSize {
                need: self.region_words(),
                got: region.len(),
            });
        }
        region[0] = self.capacity as u64;
        region[1] = self.item_width as u64;
        region[HEADER_WORDS..].fill(0);
        Ok(())
    }

    /// Allocate an owned region sized for this layout.
    pub(crate) fn alloc(&self) -> Box<[u64]> {
        vec![0u64; self.region_words()].into_boxed_slice()
    }
}

/// Adopt a raw byte buffer as a word region.
///
/// Fails with [`Error::RegionCast`] if the buffer is misaligned for `u64`
/// or not a whole number of words long.
pub fn words_of_bytes(bytes: &mut [u8]) -> Result<&mut [u64], Error> {
    bytemuck::try_cast_slice_mut(bytes).map_err(|_| Error::RegionCast)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_accounting() {
        let layout = Layout::new(10, 3, 1).unwrap();
        assert_eq!(layout.record_words(), 5);
        assert_eq!(layout.region_words(), 2 + 10 * 5);
        assert_eq!(layout.record_range(0), 2..7);
        assert_eq!(layout.record_range(9), 47..52);
    }

    #[test]
    fn invalid_shapes_are_refused() {
        assert_eq!(Layout::new(0, 3, 1), Err(Error::Capacity));
        assert_eq!(
            Layout::new(10, 0, 1),
            Err(Error::ItemWidth { got: 0, min: 1 })
        );
        assert_eq!(
            Layout::new(10, 2, 3),
            Err(Error::ItemWidth { got: 2, min: 3 })
        );
    }

    #[test]
    fn imprint_checks_size_before_writing() {
        let layout = Layout::new(4, 1, 1).unwrap();
        let mut short = vec![u64::MAX; layout.region_words() - 1];
        assert_eq!(
            layout.imprint(&mut short),
            Err(Error::RegionSize {
                need: layout.region_words(),
                got: layout.region_words() - 1,
            })
        );
        assert!(short.iter().all(|&word| word == u64::MAX));

        let mut region = layout.alloc();
        layout.imprint(&mut region).unwrap();
        assert_eq!(region[0], 4);
        assert_eq!(region[1], 1);
        assert!(region[HEADER_WORDS..].iter().all(|&word| word == 0));
    }

    #[test]
    fn byte_buffers_cast_to_words() {
        let mut backing = vec![0u64; 8];
        let bytes = bytemuck::cast_slice_mut::<u64, u8>(&mut backing);
        assert_eq!(words_of_bytes(bytes).unwrap().len(), 8);

        let mut backing = vec![0u64; 1];
        let bytes = bytemuck::cast_slice_mut::<u64, u8>(&mut backing);
        assert_eq!(words_of_bytes(&mut bytes[1..]), Err(Error::RegionCast));
    }
}
