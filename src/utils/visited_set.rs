/// A bitset of "already visited" flags, indexed by shape index.
///
/// A quadtree query reaches a shape once per leaf it is stored in. The query
/// deduplicates them with this set, which must be clear between two queries.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    const BITS: usize = u64::BITS as usize;

    /// Creates an empty set able to track no index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set able to track indices in `0..len`, all unvisited.
    pub fn with_len(len: usize) -> Self {
        let mut result = Self::new();
        result.reset(len);
        result
    }

    /// Number of trackable indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this set tracks no index at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resizes the set to track `0..len` and marks every index unvisited.
    pub fn reset(&mut self, len: usize) {
        let num_words = len.div_ceil(Self::BITS);
        self.words.clear();
        self.words.resize(num_words, 0);
        self.len = len;
    }

    /// Is `i` marked as visited?
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        debug_assert!(i < self.len, "Index {} out of bounds ({}).", i, self.len);
        self.words[i / Self::BITS] & (1 << (i % Self::BITS)) != 0
    }

    /// Marks `i` as visited. Returns `true` if it was not visited before.
    #[inline]
    pub fn insert(&mut self, i: usize) -> bool {
        debug_assert!(i < self.len, "Index {} out of bounds ({}).", i, self.len);
        let word = &mut self.words[i / Self::BITS];
        let mask = 1 << (i % Self::BITS);
        let was_unset = *word & mask == 0;
        *word |= mask;
        was_unset
    }

    /// Marks `i` as unvisited.
    #[inline]
    pub fn remove(&mut self, i: usize) {
        debug_assert!(i < self.len, "Index {} out of bounds ({}).", i, self.len);
        self.words[i / Self::BITS] &= !(1 << (i % Self::BITS));
    }

    /// Returns `true` if no index is marked.
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }
}
