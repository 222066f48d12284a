use crate::Positional;

impl<T> Positional for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> bool {
        match <[T]>::get_mut(self, index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    fn append(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn insert(&mut self, index: usize, item: T) -> bool {
        if index > self.len() {
            return false;
        }
        Vec::insert(self, index, item);
        true
    }

    fn delete(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| Vec::remove(self, index))
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }
}
