use crate::orst::{Algorithm, Sorter};

/// An implementation of [Tournament Sort](https://en.wikipedia.org/wiki/Tournament_sort)
///
/// # Usage
///```
/// use sortbench_core::orst::{Sorter, TournamentSorter};
///
/// let mut slice = [9, 3, 7, 3, 1];
/// TournamentSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 3, 3, 7, 9]);
///```
///
/// # Explanation
///
/// The elements are the leaves of a complete binary tree, padded up to the next power of two.
/// Every internal node records which leaf wins the match between its two children, the smaller
/// value winning, so the root always points at the overall minimum.
///
/// Sorting repeatedly takes the root's leaf as the next output, retires that leaf and replays
/// only the matches on the path from it back to the root, O(log n) per element. Padding and
/// retired leaves act as a sentinel larger than any value, so inputs holding `i32::MAX` are fine.
///
/// Ties are decided by tree position (left wins), not by input order, and the sort is listed as
/// unstable.
pub struct TournamentSorter;

/// The leaf that wins the match between leaves `a` and `b`. Empty leaves lose to everything.
fn winner<T: Ord>(leaves: &[Option<T>], a: usize, b: usize) -> usize {
    match (&leaves[a], &leaves[b]) {
        (Some(left), Some(right)) if right < left => b,
        (None, Some(_)) => b,
        _ => a,
    }
}

impl<T> Sorter<T> for TournamentSorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        let len = slice.len();
        if len < 2 {
            return;
        }

        let width = len.next_power_of_two();
        let mut leaves = slice.iter().cloned().map(Some).collect::<Vec<_>>();
        leaves.resize_with(width, || None);

        // Node `i` has children `2i` and `2i + 1`; the root is 1 and the leaves start at `width`.
        let mut tree = vec![0; 2 * width];
        for (leaf, node) in tree[width..].iter_mut().enumerate() {
            *node = leaf;
        }
        for node in (1..width).rev() {
            tree[node] = winner(&leaves, tree[2 * node], tree[2 * node + 1]);
        }

        for slot in slice.iter_mut() {
            let leaf = tree[1];
            if let Some(value) = leaves[leaf].take() {
                *slot = value;
            }

            let mut node = (width + leaf) / 2;
            while node >= 1 {
                tree[node] = winner(&leaves, tree[2 * node], tree[2 * node + 1]);
                node /= 2;
            }
        }
    }
}

impl Algorithm for TournamentSorter {
    fn name(&self) -> &'static str {
        "Tournament Sort"
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
        "O(n)"
    }
}
