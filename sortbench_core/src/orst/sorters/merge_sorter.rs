use crate::orst::{Algorithm, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortbench_core::orst::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort splits the slice at its midpoint, sorts both halves recursively and then merges
/// them. The merge copies each half into its own buffer and repeatedly takes the smaller head,
/// preferring the left one on ties, which is what makes the sort stable.
///
/// The split is always even, so every input costs O(n log n) comparisons. The buffers of a single
/// merge hold the whole range being merged, hence O(n) auxiliary space.
pub struct MergeSorter;

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]` back into `slice`.
///
/// On equal heads the element from the left run goes first.
pub(crate) fn merge<T: Ord + Clone>(slice: &mut [T], mid: usize) {
    let mut left = slice[..mid].to_vec().into_iter().peekable();
    let mut right = slice[mid..].to_vec().into_iter().peekable();

    for slot in slice.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };

        let next = if take_left { left.next() } else { right.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}

fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let mid = slice.len() / 2;
    merge_sort(&mut slice[..mid]);
    merge_sort(&mut slice[mid..]);
    merge(slice, mid);
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        merge_sort(slice)
    }
}

impl Algorithm for MergeSorter {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn is_stable(&self) -> bool {
        true
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
        "O(n)"
    }
}
