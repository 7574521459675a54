//! Fixed-universe bit set for state membership.
//!
//! Terminal sets of automata are subsets of a finite state space whose size is
//! known up front, so the bit set carries its universe size. That makes the
//! complement well-defined: it flips exactly the bits in `0..universe`.

/// A bit set over the universe `0..universe`, backed by a vector of u64 words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of valid bit positions
    universe: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    fn num_words(universe: usize) -> usize {
        universe.div_ceil(Self::BITS_PER_WORD)
    }

    /// Creates an empty bit set over `0..universe`.
    pub fn new(universe: usize) -> Self {
        Self {
            words: vec![0; Self::num_words(universe)],
            universe,
        }
    }

    /// Creates a bit set with every bit in `0..universe` set.
    pub fn full(universe: usize) -> Self {
        let mut bs = Self {
            words: vec![u64::MAX; Self::num_words(universe)],
            universe,
        };
        bs.clear_tail();
        bs
    }

    /// Returns the size of the universe.
    #[inline]
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Returns the number of set bits.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Zeroes the unused high bits of the last word.
    fn clear_tail(&mut self) {
        let rem = self.universe % Self::BITS_PER_WORD;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.universe {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the universe.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(
            index < self.universe,
            "Bit {} out of range for universe of size {}",
            index,
            self.universe
        );
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        self.words[word_idx] |= mask;
        was_clear
    }

    /// Clears the bit at the given index. Returns true if the bit was previously set.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.universe {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_set = self.words[word_idx] & mask != 0;
        self.words[word_idx] &= !mask;
        was_set
    }

    /// Returns the complement with respect to the universe.
    pub fn complement(&self) -> Self {
        let mut bs = Self {
            words: self.words.iter().map(|w| !w).collect(),
            universe: self.universe,
        };
        bs.clear_tail();
        bs
    }

    /// Returns the intersection of two bit sets over the same universe.
    pub fn intersection(&self, other: &Self) -> Self {
        assert_eq!(self.universe, other.universe, "Universe mismatch");
        Self {
            words: self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect(),
            universe: self.universe,
        }
    }

    /// Returns the union of two bit sets over the same universe.
    pub fn union(&self, other: &Self) -> Self {
        assert_eq!(self.universe, other.universe, "Universe mismatch");
        Self {
            words: self.words.iter().zip(&other.words).map(|(a, b)| a | b).collect(),
            universe: self.universe,
        }
    }

    /// Returns true if the two sets share at least one bit.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }

    /// Extends the bit set by setting all bits from an iterator.
    pub fn extend(&mut self, iter: impl IntoIterator<Item = usize>) {
        for index in iter {
            self.insert(index);
        }
    }

    /// Returns an iterator over all set bit indices, in increasing order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = BitSet::new(130);
        assert!(set.is_empty());
        assert_eq!(set.universe(), 130);
        assert_eq!(set.iter().count(), 0);
        assert!(!set.contains(129));
        assert!(!set.contains(1000));
    }

    #[test]
    fn test_insert_and_remove_report_change() {
        let mut set = BitSet::new(8);
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert!(set.contains(7));
        assert!(set.remove(7));
        assert!(!set.remove(7));
        assert!(!set.remove(8));
        assert!(set.is_empty());
    }

    #[test]
    #[should_panic(expected = "Bit 8 out of range")]
    fn test_insert_outside_universe() {
        let mut set = BitSet::new(8);
        set.insert(8);
    }

    #[test]
    fn test_full() {
        let set = BitSet::full(70);
        assert_eq!(set.len(), 70);
        assert!(set.contains(69));
        assert!(!set.contains(70));
        assert_eq!(BitSet::full(64).len(), 64);
        assert_eq!(BitSet::full(0).len(), 0);
    }

    #[test]
    fn test_complement() {
        let mut set = BitSet::new(70);
        set.extend([0, 3, 64, 69]);
        let c = set.complement();
        assert_eq!(c.len(), 66);
        assert!(!c.contains(0));
        assert!(c.contains(1));
        assert!(!c.contains(69));
        // Tail bits beyond the universe stay clear.
        assert!(!c.contains(70));
        assert_eq!(c.complement(), set);
        assert_eq!(BitSet::new(70).complement(), BitSet::full(70));
    }

    #[test]
    fn test_intersection_union() {
        let mut a = BitSet::new(10);
        a.extend([1, 2, 3]);
        let mut b = BitSet::new(10);
        b.extend([3, 4]);
        assert_eq!(a.intersection(&b).iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(a.union(&b).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&a.complement()));
    }

    #[test]
    #[should_panic(expected = "Universe mismatch")]
    fn test_union_different_universes() {
        BitSet::new(4).union(&BitSet::new(5));
    }

    #[test]
    fn test_iter_crosses_words() {
        let mut set = BitSet::new(200);
        set.extend([199, 0, 63, 128, 64]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 128, 199]);
    }
}
