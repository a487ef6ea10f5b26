//! Synthetic data sets for the benchmarks.
//!
//! Every generator takes its random source explicitly, so seeding one
//! [`StdRng`](rand::rngs::StdRng) makes a whole benchmark reproducible.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sortbench_core::data::{self, DataSetKind, GeneratorConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let values = data::generate(DataSetKind::Descending, 5, &GeneratorConfig::default(), &mut rng);
//! assert_eq!(values, [4, 3, 2, 1, 0]);
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::Rng;

use crate::error::ParseKindError;

/// The shape of a generated data set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataSetKind {
    /// Uniformly random values.
    Random,
    /// `0, 1, .., n - 1`.
    Ascending,
    /// `n - 1, .., 1, 0`.
    Descending,
    /// Ascending with a fraction of the positions randomly swapped.
    PartiallySorted,
}

impl DataSetKind {
    pub const ALL: [DataSetKind; 4] = [
        DataSetKind::Random,
        DataSetKind::Ascending,
        DataSetKind::Descending,
        DataSetKind::PartiallySorted,
    ];

    /// The label used in reports, e.g. `"Sorted (Asc)"`.
    pub fn label(self) -> &'static str {
        match self {
            DataSetKind::Random => "Random",
            DataSetKind::Ascending => "Sorted (Asc)",
            DataSetKind::Descending => "Sorted (Desc)",
            DataSetKind::PartiallySorted => "Partially Sorted",
        }
    }

    fn id(self) -> &'static str {
        match self {
            DataSetKind::Random => "random",
            DataSetKind::Ascending => "ascending",
            DataSetKind::Descending => "descending",
            DataSetKind::PartiallySorted => "partial",
        }
    }
}

impl Display for DataSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DataSetKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(DataSetKind::Random),
            "ascending" | "asc" => Ok(DataSetKind::Ascending),
            "descending" | "desc" => Ok(DataSetKind::Descending),
            "partial" | "partially-sorted" => Ok(DataSetKind::PartiallySorted),
            _ => Err(ParseKindError::new(
                "data set kind",
                s,
                Self::ALL.iter().map(|kind| kind.id()).collect(),
            )),
        }
    }
}

/// Knobs of the generators.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Smallest random value, inclusive.
    pub min: i32,
    /// Largest random value, inclusive.
    pub max: i32,
    /// Fraction of a partially sorted set left untouched, in `[0, 1]`.
    pub sorted_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 1000,
            sorted_ratio: 0.7,
        }
    }
}

/// `size` values drawn uniformly from `min..=max`. The bounds are swapped if given backwards.
pub fn random<R: Rng + ?Sized>(size: usize, min: i32, max: i32, rng: &mut R) -> Vec<i32> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    (0..size).map(|_| rng.gen_range(low..=high)).collect()
}

/// `0, 1, .., size - 1`, or the reverse when `ascending` is false.
pub fn sorted(size: usize, ascending: bool) -> Vec<i32> {
    let mut values = (0..size)
        .map(|i| i32::try_from(i).unwrap_or(i32::MAX))
        .collect::<Vec<_>>();
    if !ascending {
        values.reverse();
    }
    values
}

/// An ascending set where `size * (1 - sorted_ratio)` random pairs of positions were swapped.
pub fn partially_sorted<R: Rng + ?Sized>(size: usize, sorted_ratio: f64, rng: &mut R) -> Vec<i32> {
    let mut values = sorted(size, true);
    if size < 2 {
        return values;
    }

    let ratio = if sorted_ratio.is_nan() {
        1.0
    } else {
        sorted_ratio.clamp(0.0, 1.0)
    };
    let swaps = (size as f64 * (1.0 - ratio)) as usize;

    for _ in 0..swaps {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        values.swap(a, b);
    }
    values
}

/// Generates a data set of the given kind.
pub fn generate<R: Rng + ?Sized>(
    kind: DataSetKind,
    size: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<i32> {
    match kind {
        DataSetKind::Random => random(size, config.min, config.max, rng),
        DataSetKind::Ascending => sorted(size, true),
        DataSetKind::Descending => sorted(size, false),
        DataSetKind::PartiallySorted => partially_sorted(size, config.sorted_ratio, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = random(10_000, -5, 5, &mut rng);

        assert_eq!(values.len(), 10_000);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));
        assert!(values.contains(&-5) && values.contains(&5));
    }

    #[test]
    fn random_with_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = random(100, 10, 0, &mut rng);
        assert!(values.iter().all(|v| (0..=10).contains(v)));
    }

    #[test]
    fn same_seed_same_data() {
        let config = GeneratorConfig::default();
        for kind in DataSetKind::ALL {
            let a = generate(kind, 256, &config, &mut StdRng::seed_from_u64(9));
            let b = generate(kind, 256, &config, &mut StdRng::seed_from_u64(9));
            assert_eq!(a, b, "{kind}");
        }
    }

    #[test]
    fn sorted_both_ways() {
        assert_eq!(sorted(5, true), [0, 1, 2, 3, 4]);
        assert_eq!(sorted(5, false), [4, 3, 2, 1, 0]);
        assert!(sorted(0, false).is_empty());
    }

    #[test]
    fn partially_sorted_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut values = partially_sorted(1000, 0.7, &mut rng);

        assert_ne!(values, sorted(1000, true));
        values.sort_unstable();
        assert_eq!(values, sorted(1000, true));
    }

    #[test]
    fn fully_sorted_ratio_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(partially_sorted(100, 1.0, &mut rng), sorted(100, true));
        assert_eq!(partially_sorted(100, 7.5, &mut rng), sorted(100, true));
    }

    #[test]
    fn tiny_sizes() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GeneratorConfig::default();
        for kind in DataSetKind::ALL {
            assert!(generate(kind, 0, &config, &mut rng).is_empty());
            assert_eq!(generate(kind, 1, &config, &mut rng).len(), 1);
        }
    }

    #[test]
    fn kinds_parse() {
        assert_eq!("asc".parse(), Ok(DataSetKind::Ascending));
        assert_eq!("Descending".parse(), Ok(DataSetKind::Descending));
        assert_eq!("partially-sorted".parse(), Ok(DataSetKind::PartiallySorted));
        for kind in DataSetKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
        assert!("zigzag".parse::<DataSetKind>().is_err());
    }
}
