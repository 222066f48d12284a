use crate::error::{ArrayError, Result};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::policy::ResizePolicy;
use crate::stats::ResizeStats;
use crate::store::BackingStore;
use collection_traits::{HasCapacity, HasLength, Positional};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

/// Contiguous growable array with explicit capacity management.
///
/// Slots `[0, len)` always hold live elements, the rest of the backing store
/// is empty. The store is replaced as a whole whenever the [`ResizePolicy`]
/// asks for a different capacity, so appends are amortized O(1).
///
/// Out-of-range positional edits ([`set`](Self::set),
/// [`insert`](Self::insert), [`delete`](Self::delete)) are reported through
/// their return value. Only [`get_strict`](Self::get_strict) turns a bad index
/// into an error.
#[derive(Clone)]
pub struct DynamicArray<T> {
    store: BackingStore<T>,
    len: usize,
    initial_capacity: usize,
    policy: ResizePolicy,
    stats: ResizeStats,
}

impl<T> DynamicArray<T> {
    /// Creates an array with the default [`ResizePolicy`]
    ///
    /// Fails with [`ArrayError::InvalidArgument`] if `initial_capacity` is zero
    pub fn new(initial_capacity: usize) -> Result<Self> {
        Self::with_policy(initial_capacity, ResizePolicy::default())
    }

    pub fn with_policy(initial_capacity: usize, policy: ResizePolicy) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(ArrayError::invalid("initial capacity must be positive"));
        }
        policy.validate()?;
        debug!(initial_capacity, ?policy, "Creating dynamic array");
        Ok(Self {
            store: BackingStore::with_capacity(initial_capacity),
            len: 0,
            initial_capacity,
            policy,
            stats: ResizeStats::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    pub fn stats(&self) -> ResizeStats {
        self.stats
    }

    /// Returns the element at `index`, or `None` if it is out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.store.get(index)
    }

    /// Returns the element at `index`, or [`ArrayError::OutOfRange`]
    pub fn get_strict(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(ArrayError::OutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.store.get_mut(index)
    }

    /// Overwrites the element at `index`. Returns `false` and drops `item` if
    /// the index is out of range.
    pub fn set(&mut self, index: usize, item: T) -> bool {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Adds an element to the end, growing the backing store if it is full.
    ///
    /// # Panics
    /// If growing fails, see [`try_append`](Self::try_append)
    #[track_caller]
    pub fn append(&mut self, item: T) {
        if let Err(err) = self.try_append(item) {
            fatal(err)
        }
    }

    /// Fails only on [fatal](ArrayError::is_fatal) errors, the array must be
    /// discarded afterward.
    pub fn try_append(&mut self, item: T) -> Result<()> {
        self.grow_if_full()?;
        self.store.put(self.len, item);
        self.len += 1;
        Ok(())
    }

    /// Inserts an element at `index`, shifting everything after it to the
    /// right. `index == len` appends. Returns `false` without touching the
    /// array if `index > len`.
    ///
    /// # Panics
    /// If growing fails, see [`try_insert`](Self::try_insert)
    #[track_caller]
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        match self.try_insert(index, item) {
            Ok(inserted) => inserted,
            Err(err) => fatal(err),
        }
    }

    pub fn try_insert(&mut self, index: usize, item: T) -> Result<bool> {
        if index > self.len {
            return Ok(false);
        }
        self.grow_if_full()?;
        self.store.shift_right(index, self.len);
        self.store.put(index, item);
        self.len += 1;
        Ok(true)
    }

    /// Removes the element at `index`, shifting everything after it to the
    /// left, and shrinks the backing store if it became too sparse. Returns
    /// `None` without touching the array if `index >= len`.
    ///
    /// # Panics
    /// If shrinking fails, see [`try_delete`](Self::try_delete)
    #[track_caller]
    pub fn delete(&mut self, index: usize) -> Option<T> {
        self.try_delete(index).unwrap_or_else(|err| fatal(err))
    }

    pub fn try_delete(&mut self, index: usize) -> Result<Option<T>> {
        if index >= self.len {
            return Ok(None);
        }
        let removed = self.store.take(index);
        self.store.shift_left(index, self.len);
        self.len -= 1;
        self.shrink_if_sparse()?;
        Ok(removed)
    }

    /// Removes the last element
    #[track_caller]
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.delete(last)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        debug!(len = self.len, capacity = self.capacity(), "Clearing dynamic array");
        self.store.clear(self.len);
        self.len = 0;
    }

    /// Fresh traversal from index 0, bounded to the current length
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.store.live(self.len))
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.store.live_mut(self.len))
    }

    /// Independent copy of the live elements, in order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Human-readable dump of the elements together with size and capacity.
    /// Not meant to be parsed back.
    pub fn render(&self) -> String
    where
        T: Debug,
    {
        format!(
            "Array([{}], size={}, capacity={})",
            self.iter().map(|item| format!("{item:?}")).join(", "),
            self.len,
            self.capacity()
        )
    }

    fn grow_if_full(&mut self) -> Result<()> {
        if let Some(target) = self.policy.grow_target(self.len, self.capacity())? {
            self.reallocate(target)?;
        }
        Ok(())
    }

    fn shrink_if_sparse(&mut self) -> Result<()> {
        if let Some(target) =
            self.policy
                .shrink_target(self.len, self.capacity(), self.initial_capacity)
        {
            self.reallocate(target)?;
        }
        Ok(())
    }

    /// Replaces the backing store with one of `capacity` slots
    fn reallocate(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len || capacity == 0 {
            return Err(ArrayError::InternalInvariant {
                requested: capacity,
                len: self.len,
            });
        }

        let old_capacity = self.capacity();
        self.store = self.store.relocate(capacity, self.len);

        if capacity > old_capacity {
            self.stats.grows += 1;
        } else {
            self.stats.shrinks += 1;
        }
        self.stats.moved += self.len;
        trace!(
            old_capacity,
            capacity,
            moved = self.len,
            "Reallocated dynamic array"
        );
        Ok(())
    }
}

#[track_caller]
fn fatal(err: ArrayError) -> ! {
    panic!("dynamic array is no longer usable: {err}")
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of range for length {len}"))
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("items", &self.iter().collect_vec())
            .field("size", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Array([{}], size={}, capacity={})",
            self.iter().join(", "),
            self.len,
            self.capacity()
        )
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        let capacity = len.max(1);
        Self {
            store: BackingStore::from_vec(items, capacity),
            len,
            initial_capacity: capacity,
            policy: ResizePolicy::default(),
            stats: ResizeStats::default(),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect_vec().into()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.store.into_live(self.len))
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> HasLength for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> HasCapacity for DynamicArray<T> {
    fn capacity(&self) -> usize {
        self.store.capacity()
    }
}

impl<T> Positional for DynamicArray<T> {
    type Item = T;

    fn get(&self, index: usize) -> Option<&T> {
        DynamicArray::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> bool {
        DynamicArray::set(self, index, item)
    }

    fn append(&mut self, item: T) {
        DynamicArray::append(self, item)
    }

    fn insert(&mut self, index: usize, item: T) -> bool {
        DynamicArray::insert(self, index, item)
    }

    fn delete(&mut self, index: usize) -> Option<T> {
        DynamicArray::delete(self, index)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }
}
