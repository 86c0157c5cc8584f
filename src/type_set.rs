use std::fmt;

/// Fixed-width set of catalog positions, one bit per candidate type.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeSet(u64);

impl TypeSet {
    pub const CAPACITY: usize = u64::BITS as usize;

    pub const fn empty() -> Self {
        TypeSet(0)
    }

    pub fn with(mut self, index: usize) -> Self {
        self.insert(index);
        self
    }

    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < Self::CAPACITY);
        self.0 |= 1u64 << index;
    }

    pub fn remove(&mut self, index: usize) {
        self.0 &= !(1u64 << index);
    }

    pub fn contains(&self, index: usize) -> bool {
        index < Self::CAPACITY && self.0 & (1u64 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_subset(&self, other: &TypeSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Catalog positions in ascending (priority) order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + use<> {
        let bits = *self;
        (0..Self::CAPACITY).filter(move |idx| bits.contains(*idx))
    }

    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.0.trailing_zeros() as usize)
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for TypeSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(TypeSet::empty(), TypeSet::with)
    }
}
