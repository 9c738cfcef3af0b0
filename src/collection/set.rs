use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

/// Minimal set ADT consumed by the graph and the flow algorithms.
pub trait Set<T> {
    /// Adding an element that is already present is a no-op.
    fn add(&mut self, element: T);

    fn contains(&self, element: &T) -> bool;

    /// All elements in unspecified order. The returned vector is a copy.
    fn elements(&self) -> Vec<T>;

    fn size(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSet<T: Eq + Hash> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> Default for MapSet<T> {
    fn default() -> Self {
        Self { inner: HashSet::new() }
    }
}

impl<T: Eq + Hash> MapSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: HashSet::with_capacity(capacity) }
    }

    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> for MapSet<T> {
    #[inline]
    fn add(&mut self, element: T) {
        self.inner.insert(element);
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.inner.contains(element)
    }

    fn elements(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }

    #[inline]
    fn size(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Eq + Hash> FromIterator<T> for MapSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for MapSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> IntoIterator for MapSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a MapSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
