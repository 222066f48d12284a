use dynarray::{DynamicArray, ResizePolicy, ResizeStats};
use std::fmt::{Display, Formatter};

/// A single capacity change observed from outside the array
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ResizeEvent {
    /// Length right after the operation that triggered the resize
    pub len: usize,
    pub from: usize,
    pub to: usize,
    pub moved: usize,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub events: Vec<ResizeEvent>,
    pub operations: usize,
    pub final_len: usize,
    pub final_capacity: usize,
    pub stats: ResizeStats,
}

struct Observer {
    capacity: usize,
    moved: usize,
    events: Vec<ResizeEvent>,
}

impl Observer {
    fn new<T>(arr: &DynamicArray<T>) -> Self {
        Self {
            capacity: arr.capacity(),
            moved: arr.stats().moved,
            events: vec![],
        }
    }

    fn observe<T>(&mut self, arr: &DynamicArray<T>) {
        if arr.capacity() == self.capacity {
            return;
        }
        let moved = arr.stats().moved;
        self.events.push(ResizeEvent {
            len: arr.len(),
            from: self.capacity,
            to: arr.capacity(),
            moved: moved - self.moved,
        });
        self.capacity = arr.capacity();
        self.moved = moved;
    }

    fn finish<T>(self, title: String, operations: usize, arr: &DynamicArray<T>) -> Report {
        Report {
            title,
            events: self.events,
            operations,
            final_len: arr.len(),
            final_capacity: arr.capacity(),
            stats: arr.stats(),
        }
    }
}

/// Appends `count` elements to an array of `capacity` slots
pub fn analyze(policy: ResizePolicy, capacity: usize, count: usize) -> miette::Result<Report> {
    let mut arr = DynamicArray::with_policy(capacity, policy)?;
    let mut observer = Observer::new(&arr);

    for i in 0..count {
        arr.try_append(i)?;
        observer.observe(&arr);
    }

    Ok(observer.finish(
        format!("append {count} elements starting from capacity {capacity}"),
        count,
        &arr,
    ))
}

/// Fills an array with `count` elements, then removes them from the back
/// until one is left
pub fn drain(policy: ResizePolicy, count: usize) -> miette::Result<Report> {
    let mut arr = DynamicArray::with_policy(count.max(1), policy)?;
    arr.extend(0..count);
    let mut observer = Observer::new(&arr);

    let mut operations = 0;
    while arr.len() > 1 {
        arr.try_delete(arr.len() - 1)?;
        operations += 1;
        observer.observe(&arr);
    }

    Ok(observer.finish(
        format!("delete {operations} of {count} elements from the back"),
        operations,
        &arr,
    ))
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{:>10} {:>24} {:>10}", "size", "capacity", "moved")?;
        for event in &self.events {
            writeln!(
                f,
                "{:>10} {:>24} {:>10}",
                event.len,
                format!("{} -> {}", event.from, event.to),
                event.moved
            )?;
        }
        writeln!(
            f,
            "final size {}, capacity {}",
            self.final_len, self.final_capacity
        )?;
        writeln!(
            f,
            "{} ({:.3} moves per operation)",
            self.stats,
            self.stats.moves_per_op(self.operations)
        )
    }
}
