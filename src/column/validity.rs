//! Validity bitmask for tracking missing values in columnar data.
//!
//! Each bit represents one row: 1 = valid/present, 0 = null/missing.
//! Stored as packed `u64` words; bits beyond `len` are always zero so
//! word-level comparison and popcount stay exact.

/// A bitmask tracking row validity, one bit per row.
///
/// Bit = 1 means the row's value is present; bit = 0 means it is null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityMask {
    /// Packed bits: bit `i % 64` of word `i / 64` = validity of row `i`.
    words: Vec<u64>,
    /// Total number of rows this mask covers.
    len: usize,
}

impl ValidityMask {
    /// Creates a mask of `len` rows, all valid.
    #[must_use]
    pub fn all_valid(len: usize) -> Self {
        let word_count = len.div_ceil(64);
        let mut words = vec![u64::MAX; word_count];
        let remainder = len % 64;
        if remainder > 0 {
            if let Some(last) = words.last_mut() {
                *last = (1_u64 << remainder) - 1;
            }
        }
        Self { words, len }
    }

    /// Creates a mask from per-row validity flags.
    #[must_use]
    pub fn from_bools(valid: &[bool]) -> Self {
        let len = valid.len();
        let mut words = vec![0_u64; len.div_ceil(64)];
        for (row, flag) in valid.iter().enumerate() {
            if *flag {
                words[row / 64] |= 1_u64 << (row % 64);
            }
        }
        Self { words, len }
    }

    /// Returns the validity of row `row`.
    ///
    /// # Panics
    /// Panics if `row >= len`.
    #[must_use]
    pub fn get(&self, row: usize) -> bool {
        assert!(row < self.len, "row {} out of bounds ({})", row, self.len);
        (self.words[row / 64] >> (row % 64)) & 1 == 1
    }

    /// Sets the validity of row `row`.
    ///
    /// # Panics
    /// Panics if `row >= len`.
    pub fn set(&mut self, row: usize, valid: bool) {
        assert!(row < self.len, "row {} out of bounds ({})", row, self.len);
        if valid {
            self.words[row / 64] |= 1_u64 << (row % 64);
        } else {
            self.words[row / 64] &= !(1_u64 << (row % 64));
        }
    }

    /// Total number of rows this mask covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the mask covers no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts the valid rows in the mask.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Counts the null rows in the mask.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.len - self.valid_count()
    }

    /// Access the underlying words.
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}
