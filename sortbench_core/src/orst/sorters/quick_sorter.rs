use crate::orst::{Algorithm, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortbench_core::orst::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting. When implemented well, it can be somewhat
/// faster than merge sort and about two or three times
/// faster than heapsort.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. For this reason,
/// it is sometimes called partition-exchange sort.
/// The sub-arrays are then sorted recursively.
///
/// The pivot is the median of the first, middle and last element. Those three are put in order
/// first, then the median is parked just before the last element and a Lomuto partition scans
/// everything in front of it. Median-of-three defuses already sorted input but crafted inputs can
/// still drive it quadratic.
pub struct QuickSorter;

/// Partitions a slice of at least two elements and returns the final index of the pivot.
fn partition<T: Ord>(slice: &mut [T]) -> usize {
    let high = slice.len() - 1;
    let mid = high / 2;

    if slice[mid] < slice[0] {
        slice.swap(mid, 0);
    }
    if slice[high] < slice[0] {
        slice.swap(high, 0);
    }
    if slice[high] < slice[mid] {
        slice.swap(high, mid);
    }

    let pivot = high - 1;
    slice.swap(mid, pivot);

    let mut store = 0;
    for i in 0..pivot {
        if slice[i] < slice[pivot] {
            slice.swap(store, i);
            store += 1;
        }
    }
    slice.swap(store, pivot);

    store
}

fn quicksort<T: Ord>(mut slice: &mut [T]) {
    // Recurse into the smaller side, loop on the larger one: stack depth stays O(log n).
    while slice.len() > 1 {
        let pivot = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left);
            slice = right;
        } else {
            quicksort(right);
            slice = left;
        }
    }
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        quicksort(slice)
    }
}

impl Algorithm for QuickSorter {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn best_case(&self) -> &'static str {
        "O(n log n)"
    }

    fn average_case(&self) -> &'static str {
        "O(n log n)"
    }

    fn worst_case(&self) -> &'static str {
        "O(n²)"
    }

    fn space_complexity(&self) -> &'static str {
        "O(log n)"
    }
}
