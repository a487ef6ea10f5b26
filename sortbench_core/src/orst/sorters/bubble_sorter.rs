use crate::orst::{Algorithm, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortbench_core::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// After every pass the largest element of the unsorted range has sunk to its end, so each pass
/// looks at one element less than the previous one. A pass that makes no swap ends the sort,
/// which makes already sorted input linear.
///
/// Only strictly greater neighbours are swapped, so the sort is stable.
#[derive(Default)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        let mut end = slice.len();
        let mut swapped = true;

        while swapped {
            swapped = false;
            for i in 1..end {
                if slice[i - 1] > slice[i] {
                    slice.swap(i - 1, i);
                    swapped = true;
                }
            }
            end -= 1;
        }
    }
}

impl Algorithm for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble Sort"
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
