use crate::orst::{Algorithm, Sorter};

/// Factor the gap is divided by after every pass.
const SHRINK: f64 = 1.3;

/// An implementation of [Comb Sort](https://en.wikipedia.org/wiki/Comb_sort)
///
/// Bubble sort generalised to compare elements `gap` apart. The gap starts at the length of the
/// slice and shrinks by a factor of 1.3 each pass, never going below 1. Once the gap is 1 it
/// behaves like bubble sort and keeps passing until nothing is swapped.
///
/// Swaps across a gap can reorder equal elements, so the sort is not stable.
///
///```
/// use sortbench_core::orst::{CombSorter, Sorter};
///
/// let mut slice = [8, 4, 1, 56, 3, -44, 23, -6, 28, 0];
/// CombSorter.sort(&mut slice);
/// assert_eq!(slice, [-44, -6, 0, 1, 3, 4, 8, 23, 28, 56]);
///```
pub struct CombSorter;

impl<T> Sorter<T> for CombSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        let len = slice.len();
        if len < 2 {
            return;
        }

        let mut gap = len;
        let mut swapped = true;

        while gap > 1 || swapped {
            gap = ((gap as f64 / SHRINK) as usize).max(1);
            swapped = false;

            for i in 0..len - gap {
                if slice[i] > slice[i + gap] {
                    slice.swap(i, i + gap);
                    swapped = true;
                }
            }
        }
    }
}

impl Algorithm for CombSorter {
    fn name(&self) -> &'static str {
        "Comb Sort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn best_case(&self) -> &'static str {
        "O(n log n)"
    }

    fn average_case(&self) -> &'static str {
        "O(n²/2^p)"
    }

    fn worst_case(&self) -> &'static str {
        "O(n²)"
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
        CombSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        CombSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        CombSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        CombSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        CombSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        CombSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
