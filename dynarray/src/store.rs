/// Fixed-size run of slots. Never grows or shrinks in place, a resize builds a
/// new store with [`BackingStore::relocate`].
#[derive(Debug, Clone)]
pub(crate) struct BackingStore<T> {
    slots: Box<[Option<T>]>,
}

impl<T> BackingStore<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Builds a store holding `items` followed by empty slots
    pub fn from_vec(items: Vec<T>, capacity: usize) -> Self {
        debug_assert!(items.len() <= capacity);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(items.into_iter().map(Some));
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Writes into the slot, returning its previous content
    pub fn put(&mut self, index: usize, item: T) -> Option<T> {
        self.slots[index].replace(item)
    }

    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Moves slots `[from, end)` one position to the right. Slot `end` must be
    /// empty and ends up at `from`.
    pub fn shift_right(&mut self, from: usize, end: usize) {
        debug_assert!(self.slots[end].is_none());
        self.slots[from..=end].rotate_right(1);
    }

    /// Moves slots `(from, end)` one position to the left. Slot `from` must be
    /// empty and ends up at `end - 1`.
    pub fn shift_left(&mut self, from: usize, end: usize) {
        debug_assert!(self.slots[from].is_none());
        self.slots[from..end].rotate_left(1);
    }

    /// Clears every slot in `[0, len)`
    pub fn clear(&mut self, len: usize) {
        self.slots[..len].iter_mut().for_each(|slot| *slot = None);
    }

    /// Moves the first `len` slots into a fresh store of `capacity` slots,
    /// leaving this one empty.
    pub fn relocate(&mut self, capacity: usize, len: usize) -> Self {
        debug_assert!(len <= capacity);
        let mut target = Self::with_capacity(capacity);
        for (to, from) in target.slots.iter_mut().zip(&mut self.slots[..len]) {
            *to = from.take();
        }
        target
    }

    pub fn live(&self, len: usize) -> &[Option<T>] {
        &self.slots[..len]
    }

    pub fn live_mut(&mut self, len: usize) -> &mut [Option<T>] {
        &mut self.slots[..len]
    }

    /// Consumes the store, keeping the first `len` slots
    pub fn into_live(self, len: usize) -> Vec<Option<T>> {
        let mut slots = self.slots.into_vec();
        slots.truncate(len);
        slots
    }
}
