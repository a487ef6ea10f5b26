use crate::orst::{Algorithm, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Sorting is typically done in-place, by iterating up the array, growing the sorted list behind
/// it. At each array-position, it checks the value there against the largest value in the sorted
/// list (which happens to be next to it, in the previous array- position checked). If larger, it
/// leaves the element in place and moves to the next. If smaller, it finds the correct position
/// within the sorted list, shifts all the larger values up to make a space, and inserts into that
/// correct position.
///
/// With `smart` unset, the element is shifted left one neighbour at a time. With `smart` set, the
/// insertion point is found with a binary search and the tail is rotated in one go. Both variants
/// only move an element past strictly greater ones, so both are stable.
///
/// The classic variant is also what [`TimSorter`](crate::orst::TimSorter) uses on its runs.
///
/// # Usage
///```
/// use sortbench_core::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter{ smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 1..slice.len() {
            if !self.smart {
                let mut i = unsorted;
                while i > 0 && slice[i - 1] > slice[i] {
                    slice.swap(i - 1, i);
                    i -= 1;
                }
            } else {
                // Land after every element equal to the one being inserted.
                let i = slice[..unsorted].partition_point(|sorted| sorted <= &slice[unsorted]);
                slice[i..=unsorted].rotate_right(1);
            }
        }
    }
}

impl Algorithm for InsertionSorter {
    fn name(&self) -> &'static str {
        if self.smart {
            "Binary Insertion Sort"
        } else {
            "Insertion Sort"
        }
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn best_case(&self) -> &'static str {
        "O(n)"
    }

    fn average_case(&self) -> &'static str {
        "O(n²)"
    }

    fn worst_case(&self) -> &'static str {
        "O(n²)"
    }

    fn space_complexity(&self) -> &'static str {
        "O(1)"
    }
}
