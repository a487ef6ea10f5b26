use crate::orst::sorters::merge_sorter::merge;
use crate::orst::{Algorithm, InsertionSorter, Sorter};

/// Length of the runs that are insertion sorted before merging starts.
const RUN: usize = 32;

/// A simplified, bottom-up take on [Tim Sort](https://en.wikipedia.org/wiki/Timsort)
///
/// The slice is cut into fixed runs of 32 elements, each run is insertion sorted, and then
/// neighbouring runs are merged pairwise, doubling the merged width every pass until one run
/// covers the whole slice.
///
/// Unlike the real thing there is no detection of natural runs and no galloping during merges.
/// The merge is the same stable merge [`MergeSorter`](crate::orst::MergeSorter) uses, so the
/// result is stable.
///
///```
/// use sortbench_core::orst::{Sorter, TimSorter};
///
/// let mut slice = (0..100).rev().collect::<Vec<_>>();
/// TimSorter.sort(&mut slice);
/// assert_eq!(slice, (0..100).collect::<Vec<_>>());
///```
pub struct TimSorter;

impl<T> Sorter<T> for TimSorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        let len = slice.len();
        if len < 2 {
            return;
        }

        let runs = InsertionSorter { smart: false };
        for run in slice.chunks_mut(RUN) {
            runs.sort(run);
        }

        let mut width = RUN;
        while width < len {
            for pair in slice.chunks_mut(2 * width) {
                if pair.len() > width {
                    merge(pair, width);
                }
            }
            width *= 2;
        }
    }
}

impl Algorithm for TimSorter {
    fn name(&self) -> &'static str {
        "Tim Sort"
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
        "O(n log n)"
    }

    fn space_complexity(&self) -> &'static str {
        "O(n)"
    }
}
