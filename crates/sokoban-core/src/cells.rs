//! The [`CellSet`] bitset over board cells.

use crate::id::CellIndex;

/// A set of cells implemented as a dynamically-sized bitset.
///
/// Used for the per-goal reachability tables, where membership tests
/// sit on the deadlock hot path and a whole table must stay cheap to
/// share between many states.
#[derive(Clone, Debug, Default)]
pub struct CellSet {
    bits: Vec<u64>,
}

impl CellSet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty cell set.
    pub fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty set with room for `cells` cells without resizing.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(Self::BITS_PER_WORD)],
        }
    }

    /// Insert a cell. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: CellIndex) -> bool {
        let word = cell.get() / Self::BITS_PER_WORD;
        let bit = cell.get() % Self::BITS_PER_WORD;
        if word >= self.bits.len() {
            self.bits.resize(word + 1, 0);
        }
        let mask = 1u64 << bit;
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }

    /// Check whether the set contains a cell.
    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        let word = cell.get() / Self::BITS_PER_WORD;
        let bit = cell.get() % Self::BITS_PER_WORD;
        word < self.bits.len() && (self.bits[word] & (1u64 << bit)) != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(&self, other: &Self) -> Self {
        let max_len = self.bits.len().max(other.bits.len());
        let mut bits = Vec::with_capacity(max_len);
        for i in 0..max_len {
            let a = self.bits.get(i).copied().unwrap_or(0);
            let b = other.bits.get(i).copied().unwrap_or(0);
            bits.push(a | b);
        }
        Self { bits }
    }

    /// Whether the two sets share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Check whether `self` is a subset of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        for i in 0..self.bits.len() {
            let b = other.bits.get(i).copied().unwrap_or(0);
            if self.bits[i] & !b != 0 {
                return false;
            }
        }
        true
    }

    /// Returns `true` if the set contains no cells.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Returns the number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the cells in the set, in ascending order.
    pub fn iter(&self) -> CellSetIter<'_> {
        CellSetIter {
            bits: &self.bits,
            word_idx: 0,
            bit_idx: 0,
        }
    }
}

impl PartialEq for CellSet {
    fn eq(&self, other: &Self) -> bool {
        let max_len = self.bits.len().max(other.bits.len());
        for i in 0..max_len {
            let a = self.bits.get(i).copied().unwrap_or(0);
            let b = other.bits.get(i).copied().unwrap_or(0);
            if a != b {
                return false;
            }
        }
        true
    }
}

impl Eq for CellSet {}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        let mut set = Self::empty();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = CellIndex;
    type IntoIter = CellSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`], in ascending order.
pub struct CellSetIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    bit_idx: usize,
}

impl Iterator for CellSetIter<'_> {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.bits.len() {
            let word = self.bits[self.word_idx];
            while self.bit_idx < 64 {
                let bit = self.bit_idx;
                self.bit_idx += 1;
                if word & (1u64 << bit) != 0 {
                    return Some(CellIndex((self.word_idx * 64 + bit) as u32));
                }
            }
            self.word_idx += 1;
            self.bit_idx = 0;
        }
        None
    }
}
