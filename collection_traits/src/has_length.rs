use crate::HasLength;

#[duplicate::duplicate_item(
    container;
    [ Vec<T> ];
    [ [T] ];
)]
impl<T> HasLength for container {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}
