use log::trace;

use crate::orst::{Algorithm, Sorter};

/// Extra room left between elements: the shelf holds `(1 + GAP) * n` slots.
const GAP: f64 = 1.0;

/// An implementation of [Library Sort](https://en.wikipedia.org/wiki/Library_sort), also known
/// as gapped insertion sort.
///
/// # Usage
///```
/// use sortbench_core::orst::{LibrarySorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// LibrarySorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// A librarian who keeps some empty space on every shelf rarely has to move many books to fit a
/// new one in. Library sort does the same: the elements are inserted one by one into a "shelf"
/// twice as long as the input, which is kept sorted with gaps between the occupied slots.
///
/// For every element, a binary search over the shelf finds the first occupied slot holding a
/// strictly greater value. If there is a gap in front of that slot the element goes there,
/// otherwise neighbouring elements are shifted by one towards the closest free slot. Each time
/// the index of the inserted element is a power of two the shelf is rebalanced: all the elements
/// are spread out again at even intervals. Finally the occupied slots are read back in order.
///
/// The search skips past equal values, so later elements always land after their equals and the
/// sort is stable. When inserts keep hitting the same crowded spot the shifting degrades it to
/// O(n²).
pub struct LibrarySorter;

/// The gapped array the elements are inserted into. `None` marks a free slot.
struct Shelf<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T: Ord> Shelf<T> {
    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn next_occupied(&self, from: usize) -> Option<usize> {
        self.slots[from..]
            .iter()
            .position(Option::is_some)
            .map(|offset| from + offset)
    }

    fn next_free(&self, from: usize) -> Option<usize> {
        self.slots[from..]
            .iter()
            .position(Option::is_none)
            .map(|offset| from + offset)
    }

    fn prev_free(&self, before: usize) -> Option<usize> {
        self.slots[..before].iter().rposition(Option::is_none)
    }

    /// Smallest slot `s` such that the first occupied slot at or after `s` holds a value greater
    /// than `value` (or there is none). Everything occupied before `s` is `<= value`.
    fn search(&self, value: &T) -> usize {
        let (mut lo, mut hi) = (0, self.capacity());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.next_occupied(mid) {
                Some(slot) if self.slots[slot].as_ref().is_some_and(|held| held <= value) => {
                    lo = slot + 1;
                }
                _ => hi = mid,
            }
        }
        lo
    }

    fn insert(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        let start = self.search(&value);
        let target = self.next_occupied(start).unwrap_or(self.capacity());

        let slot = if start < target {
            // Free gap in `start..target`. Append at the left edge when nothing greater exists,
            // otherwise split the gap to leave room on both sides.
            if target == self.capacity() {
                start
            } else {
                start + (target - start) / 2
            }
        } else if let Some(free) = self.next_free(target) {
            self.slots[target..=free].rotate_right(1);
            target
        } else {
            // Nothing free to the right; make room on the left instead.
            match self.prev_free(target) {
                Some(free) => {
                    self.slots[free..target].rotate_left(1);
                    target - 1
                }
                None => return,
            }
        };

        self.slots[slot] = Some(value);
        self.len += 1;
    }

    /// Spreads the elements evenly over the shelf, keeping their order.
    fn rebalance(&mut self) {
        let values = self
            .slots
            .iter_mut()
            .filter_map(Option::take)
            .collect::<Vec<_>>();

        let interval = self.capacity() / (values.len() + 1);
        trace!(
            "library sort: rebalancing {} elements at interval {}",
            values.len(),
            interval
        );

        for (i, value) in values.into_iter().enumerate() {
            self.slots[(i + 1) * interval] = Some(value);
        }
    }

    fn into_sorted(self) -> impl Iterator<Item = T> {
        self.slots.into_iter().flatten()
    }
}

impl<T> Sorter<T> for LibrarySorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        let len = slice.len();
        if len < 2 {
            return;
        }

        let capacity = ((1.0 + GAP) * len as f64).ceil() as usize;
        let mut shelf = Shelf::with_capacity(capacity);

        for (i, value) in slice.iter().cloned().enumerate() {
            shelf.insert(value);
            if i > 0 && i.is_power_of_two() {
                shelf.rebalance();
            }
        }

        for (slot, value) in slice.iter_mut().zip(shelf.into_sorted()) {
            *slot = value;
        }
    }
}

impl Algorithm for LibrarySorter {
    fn name(&self) -> &'static str {
        "Library Sort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn best_case(&self) -> &'static str {
        "O(n)"
    }

    fn average_case(&self) -> &'static str {
        "O(n log n)"
    }

    fn worst_case(&self) -> &'static str {
        "O(n²)"
    }

    fn space_complexity(&self) -> &'static str {
        "O(n)"
    }
}
