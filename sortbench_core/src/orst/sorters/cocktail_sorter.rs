use crate::orst::{Algorithm, Sorter};

/// An implementation of [Cocktail Shaker Sort](https://en.wikipedia.org/wiki/Cocktail_shaker_sort)
///
/// # Usage
///```
/// use sortbench_core::orst::{CocktailSorter, Sorter};
///
/// let mut slice = [2, 3, 4, 5, 1];
/// CocktailSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// A bidirectional bubble sort. A forward pass carries the largest element of the active window
/// to its end, then a backward pass carries the smallest one to its start, and the window shrinks
/// by one on each side. Small elements stuck near the end (the "turtles" of bubble sort) are
/// moved in a single backward pass instead of one step per pass.
///
/// The sort stops as soon as either pass makes no swap. Adjacent swaps of strictly greater
/// elements keep it stable.
pub struct CocktailSorter;

impl<T> Sorter<T> for CocktailSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        let mut start = 0;
        let mut end = slice.len() - 1;
        let mut swapped = true;

        while swapped {
            swapped = false;
            for i in start..end {
                if slice[i] > slice[i + 1] {
                    slice.swap(i, i + 1);
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }

            // The largest element is now at `end`.
            swapped = false;
            end -= 1;

            for i in (start..end).rev() {
                if slice[i] > slice[i + 1] {
                    slice.swap(i, i + 1);
                    swapped = true;
                }
            }

            start += 1;
        }
    }
}

impl Algorithm for CocktailSorter {
    fn name(&self) -> &'static str {
        "Cocktail Shaker Sort"
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
