use std::fmt::{Display, Formatter};

/// Reallocation counters of a single array
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ResizeStats {
    pub grows: usize,
    pub shrinks: usize,
    /// Elements moved into a new backing store, across all reallocations
    pub moved: usize,
}

impl ResizeStats {
    /// Average number of moves per element for `operations` performed edits
    pub fn moves_per_op(&self, operations: usize) -> f64 {
        if operations == 0 {
            return 0.0;
        }
        self.moved as f64 / operations as f64
    }
}

impl Display for ResizeStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} grows, {} shrinks, {} elements moved",
            self.grows, self.shrinks, self.moved
        )
    }
}
