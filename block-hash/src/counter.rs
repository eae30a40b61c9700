//! Message length counters wider than a machine word.

use alloc::vec::Vec;

use crate::endian::write_u32v_le;

/// Unsigned counter stored as little-endian `u32` words.
///
/// The width is fixed in bytes at construction. Additions that carry past
/// the last allocated bit panic instead of wrapping: a wrapped length would
/// silently corrupt the digest of the message being hashed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BigCounter {
    words: Vec<u32>,
    len_bytes: usize,
}

impl BigCounter {
    /// Creates a zeroed counter able to hold a `bytes`-byte value.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is zero.
    pub fn new(bytes: usize) -> Self {
        assert!(bytes > 0, "counter width must be non-zero");
        Self {
            words: alloc::vec![0; (bytes + 3) / 4],
            len_bytes: bytes,
        }
    }

    /// Adds a 32-bit value, propagating carries into higher words.
    ///
    /// # Panics
    ///
    /// Panics if the accumulated value no longer fits the counter width.
    pub fn add_u32(&mut self, value: u32) {
        self.add_at(0, value);
    }

    /// Adds a 64-bit value, propagating carries into higher words.
    ///
    /// # Panics
    ///
    /// Panics if the accumulated value no longer fits the counter width.
    pub fn add_u64(&mut self, value: u64) {
        self.add_at(0, value as u32);
        self.add_at(1, (value >> 32) as u32);
    }

    /// Zeroes the counter.
    pub fn clear(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    /// Little-endian serialization of the counter, sized exactly to the
    /// width requested at construction.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = alloc::vec![0; self.len_bytes];
        write_u32v_le(&mut bytes, &self.words);
        bytes
    }

    /// Low 32 bits of the counter.
    pub fn to_u32(&self) -> u32 {
        self.words[0]
    }

    /// Low 64 bits of the counter.
    pub fn to_u64(&self) -> u64 {
        let high = if self.words.len() > 1 { self.words[1] } else { 0 };
        (u64::from(high) << 32) | u64::from(self.words[0])
    }

    fn add_at(&mut self, index: usize, value: u32) {
        if value == 0 {
            return;
        }
        let mut carry = u64::from(value);
        let mut i = index;
        while carry != 0 {
            assert!(i < self.words.len(), "counter overflow");
            let sum = u64::from(self.words[i]) + carry;
            self.words[i] = sum as u32;
            carry = sum >> 32;
            i += 1;
        }
        let top = self.words[self.words.len() - 1];
        assert!(top & !self.top_mask() == 0, "counter overflow");
    }

    /// Bits of the last word covered by the byte width.
    fn top_mask(&self) -> u32 {
        match self.len_bytes % 4 {
            0 => u32::MAX,
            r => (1u32 << (8 * r)) - 1,
        }
    }
}
