use crate::orst::{Algorithm, Sorter};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use sortbench_core::orst::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// The slice is first rearranged into a max-heap, bottom-up: every parent, from the last one back
/// to the root, is sifted down below its larger child. Then the root, which is the maximum, is
/// swapped with the last element of the heap, the heap shrinks by one, and the new root is sifted
/// down again. When the heap is empty the slice is sorted.
///
/// Everything happens in place, O(1) extra space, O(n log n) in every case. Moving the root to the
/// back jumps over equal elements, so the sort is not stable.
pub struct HeapSorter;

/// Restores the max-heap property of `heap` below `root`.
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap.len() {
            return;
        }

        let mut largest = root;
        if heap[left] > heap[largest] {
            largest = left;
        }
        let right = left + 1;
        if right < heap.len() && heap[right] > heap[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        let len = slice.len();

        for parent in (0..len / 2).rev() {
            sift_down(slice, parent);
        }

        for end in (1..len).rev() {
            slice.swap(0, end);
            sift_down(&mut slice[..end], 0);
        }
    }
}

impl Algorithm for HeapSorter {
    fn name(&self) -> &'static str {
        "Heap Sort"
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
        "O(n log n)"
    }

    fn space_complexity(&self) -> &'static str {
        "O(1)"
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn heapify_puts_max_at_root() {
        let mut slice = [3, 9, 2, 7, 1, 8];
        for parent in (0..slice.len() / 2).rev() {
            sift_down(&mut slice, parent);
        }
        assert_eq!(slice[0], 9);
        for child in 1..slice.len() {
            assert!(slice[(child - 1) / 2] >= slice[child]);
        }
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        HeapSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        HeapSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        HeapSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        HeapSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
