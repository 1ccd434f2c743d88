use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;
use core::slice;

use crate::error::Error;
use crate::hash::FnvBuildHasher;
use crate::iter;
use crate::pair::Pair;
use crate::traits::Take;
use crate::vector::{growth_failure, Vector};

const INITIAL_BUCKETS: usize = 16;
const GROWTH_FACTOR: usize = 2;
// Rehash before an insert would push len / bucket_count past 3/4.
const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

type Bucket<K, V> = Vector<Pair<K, V>>;

/// Hash table with chained collision handling.
///
/// Buckets live in a [`Vector`]; each bucket is a chain of
/// [`Pair`]`<K, V>` entries whose key hashes to that bucket index. The
/// bucket vector is allocated on the first insert, holds 16 buckets to
/// start, and doubles whenever an insert would push the load factor past
/// 3/4 — rehashing relocates every entry by move against the new bucket
/// count. The bucket count never shrinks.
///
/// Keys need `Hash + Eq`, and equal keys must hash equal (guaranteed by
/// any lawful `Hash` impl). The hasher state is pluggable through `S` and
/// defaults to [`FnvBuildHasher`]. Iteration order is unspecified and may
/// change across any insert that triggers a rehash.
pub struct UnorderedMap<K, V, S = FnvBuildHasher> {
    buckets: Vector<Bucket<K, V>>,
    len: usize,
    hasher: S,
}

impl<K, V> UnorderedMap<K, V, FnvBuildHasher> {
    /// An empty map with the default hasher. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(FnvBuildHasher::default())
    }
}

impl<K, V, S> UnorderedMap<K, V, S> {
    /// An empty map with an explicit hasher state. Does not allocate.
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: Vector::new(),
            len: 0,
            hasher,
        }
    }

    /// Number of entries in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets currently backing the table. Zero until the first
    /// insert, then always positive and only growing.
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Drops every entry and releases all storage.
    pub fn clear(&mut self) {
        self.buckets.reset();
        self.len = 0;
    }

    /// Iterates all entries in unspecified order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.as_slice().iter(),
            chain: Default::default(),
            remaining: self.len,
        }
    }

    /// Iterates all entries with mutable values, in unspecified order.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let remaining = self.len;
        IterMut {
            buckets: self.buckets.as_mut_slice().iter_mut(),
            chain: Default::default(),
            remaining,
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> UnorderedMap<K, V, S> {
    fn bucket_index(&self, key: &K) -> usize {
        debug_assert!(!self.buckets.is_empty());
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts a key/value entry. An existing entry with an equal key has
    /// its value replaced and returned; otherwise the entry is appended to
    /// its bucket's chain. Amortized O(1).
    ///
    /// # Panics
    ///
    /// Panics if growing a buffer fails.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(previous) => previous,
            Err(err) => growth_failure(err),
        }
    }

    /// Fallible form of [`UnorderedMap::insert`].
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityOverflow` or `Error::AllocationFailed`. A
    /// failure before relocation leaves the map unchanged; a failure while
    /// rehashing drops the entries that could not be relocated and adjusts
    /// the count to the survivors, so the map stays consistent.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        if self.buckets.is_empty() {
            self.try_rehash(INITIAL_BUCKETS)?;
        }

        let index = self.bucket_index(&key);
        for entry in self.buckets[index].iter_mut() {
            if entry.first == key {
                return Ok(Some(mem::replace(&mut entry.second, value)));
            }
        }

        if (self.len + 1) * LOAD_DEN > self.bucket_count() * LOAD_NUM {
            self.try_rehash(self.bucket_count() * GROWTH_FACTOR)?;
        }

        let index = self.bucket_index(&key);
        self.buckets[index].try_push(Pair::new(key, value))?;
        self.len += 1;
        Ok(None)
    }

    /// Looks up the value for `key`, or `None` when absent.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<&V> {
        if self.buckets.is_empty() {
            return None;
        }
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket
            .iter()
            .find(|entry| entry.first == *key)
            .map(|entry| &entry.second)
    }

    /// Looks up the value for `key` mutably, or `None` when absent.
    #[must_use]
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        if self.buckets.is_empty() {
            return None;
        }
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.first == *key)
            .map(|entry| &mut entry.second)
    }

    /// The value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the map does not contain `key`; [`UnorderedMap::find`] is
    /// the reporting form.
    #[must_use]
    pub fn get(&self, key: &K) -> &V {
        match self.find(key) {
            Some(value) => value,
            None => panic!("get() called with a key the map does not contain"),
        }
    }

    /// The value for `key`, reporting a missing key as an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` when the map does not contain `key`.
    pub fn try_get(&self, key: &K) -> Result<&V, Error> {
        self.find(key).ok_or(Error::KeyNotFound)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes the entry for `key` and returns its value, or `None` when
    /// absent. Never shrinks the bucket vector.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|entry| entry.first == *key)?;
        let entry = bucket.swap_remove(position);
        self.len -= 1;
        Some(entry.second)
    }

    /// The value for `key`, inserting one built by `make` first when the
    /// key is absent. Exactly one entry per distinct key.
    ///
    /// # Panics
    ///
    /// Panics if growing a buffer fails.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        if self.buckets.is_empty() {
            if let Err(err) = self.try_rehash(INITIAL_BUCKETS) {
                growth_failure(err);
            }
        }

        let index = self.bucket_index(&key);
        let position = self.buckets[index]
            .iter()
            .position(|entry| entry.first == key);

        match position {
            Some(position) => &mut self.buckets[index][position].second,
            None => {
                if (self.len + 1) * LOAD_DEN > self.bucket_count() * LOAD_NUM {
                    if let Err(err) = self.try_rehash(self.bucket_count() * GROWTH_FACTOR) {
                        growth_failure(err);
                    }
                }
                let index = self.bucket_index(&key);
                let bucket = &mut self.buckets[index];
                bucket.push(Pair::new(key, make()));
                self.len += 1;
                let last = bucket.len() - 1;
                &mut bucket[last].second
            }
        }
    }

    // Replaces the bucket vector with `new_count` fresh buckets and
    // relocates every entry by move against the new count. O(len).
    fn try_rehash(&mut self, new_count: usize) -> Result<(), Error> {
        let new_count = new_count.max(1);
        let mut fresh: Vector<Bucket<K, V>> = Vector::try_with_capacity(new_count)?;
        for _ in 0..new_count {
            // Capacity is reserved; these pushes cannot reallocate.
            fresh.push(Bucket::new());
        }

        let old = self.buckets.take();
        self.buckets = fresh;

        let mut kept = 0usize;
        for bucket in old {
            for entry in bucket {
                let index = self.bucket_index(&entry.first);
                match self.buckets[index].try_push(entry) {
                    Ok(()) => kept += 1,
                    Err(err) => {
                        // Entries still queued are dropped with their
                        // iterators; record the survivors and report.
                        self.len = kept;
                        return Err(err);
                    }
                }
            }
        }
        Ok(())
    }
}

impl<K, V, S: Default> Default for UnorderedMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for UnorderedMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, S: Default> Take for UnorderedMap<K, V, S> {
    fn take(&mut self) -> Self {
        Self {
            buckets: self.buckets.take(),
            len: mem::replace(&mut self.len, 0),
            hasher: mem::take(&mut self.hasher),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for UnorderedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Order-insensitive equality: same length and every entry of `self` is
/// present with an equal value in `other`.
impl<K: Hash + Eq, V: PartialEq, S: BuildHasher> PartialEq for UnorderedMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.find(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for UnorderedMap<K, V, S> {}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for UnorderedMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for UnorderedMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

/// Borrowed entry iterator. Order is unspecified.
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Bucket<K, V>>,
    chain: slice::Iter<'a, Pair<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((&entry.first, &entry.second));
            }
            self.chain = self.buckets.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Borrowed entry iterator with mutable values. Order is unspecified.
pub struct IterMut<'a, K, V> {
    buckets: slice::IterMut<'a, Bucket<K, V>>,
    chain: slice::IterMut<'a, Pair<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((&entry.first, &mut entry.second));
            }
            self.chain = self.buckets.next()?.as_mut_slice().iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning entry iterator. Order is unspecified; entries not consumed are
/// dropped with the iterator.
pub struct IntoIter<K, V> {
    buckets: iter::IntoIter<Bucket<K, V>>,
    chain: Option<iter::IntoIter<Pair<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = &mut self.chain {
                if let Some(entry) = chain.next() {
                    self.remaining -= 1;
                    return Some(entry.into_parts());
                }
            }
            self.chain = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V, S> IntoIterator for UnorderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        let UnorderedMap { buckets, len, .. } = self;
        IntoIter {
            buckets: buckets.into_iter(),
            chain: None,
            remaining: len,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a UnorderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut UnorderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
