use crate::Positional;

/// A single recorded edit of a positional list
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ListEdit<T> {
    Append(T),
    Insert(usize, T),
    Delete(usize),
    Set(usize, T),
    Clear,
}

impl<T> ListEdit<T> {
    /// Applies the edit, returning whether the list was changed.
    ///
    /// `Append` and `Clear` always succeed, positional edits fail without
    /// touching the list when the index is out of range.
    pub fn apply<Col: Positional<Item = T> + ?Sized>(self, list: &mut Col) -> bool {
        match self {
            ListEdit::Append(item) => {
                list.append(item);
                true
            }
            ListEdit::Insert(idx, item) => list.insert(idx, item),
            ListEdit::Delete(idx) => list.delete(idx).is_some(),
            ListEdit::Set(idx, item) => list.set(idx, item),
            ListEdit::Clear => {
                list.clear();
                true
            }
        }
    }
}
