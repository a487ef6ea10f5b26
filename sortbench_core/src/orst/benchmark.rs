//! Timing, memory and correctness measurements of the sorters.
//!
//! A [`Harness`] runs one algorithm over one data set and produces a [`BenchmarkResult`]. The
//! batch drivers on top of it run many algorithms, sizes and data set kinds in one go.
//!
//! Everything is sequential. Each run sorts its own copy of the data, so the same input can be
//! handed to every algorithm in turn.

use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use super::{is_sorted, Algorithm, Sorter};
use crate::data::{self, DataSetKind, GeneratorConfig};
use crate::memory::{MemorySampler, ProcessMemory};

/// The outcome of one benchmark run, or the average of several.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    algorithm: String,
    time_ms: f64,
    memory_bytes: u64,
    stable: bool,
    sorted: bool,
}

impl BenchmarkResult {
    pub fn new(
        algorithm: impl Into<String>,
        time_ms: f64,
        memory_bytes: u64,
        stable: bool,
        sorted: bool,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            time_ms: time_ms.max(0.0),
            memory_bytes,
            stable,
            sorted,
        }
    }

    /// Appends the data set description to the label: `"Heap Sort [Random, n=1000]"`.
    pub fn annotate(mut self, kind: DataSetKind, size: usize) -> Self {
        self.algorithm = annotated(&self.algorithm, kind, size);
        self
    }

    /// The algorithm name, possibly annotated with the data set it ran on.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Wall time of the sort in milliseconds.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Growth of the process memory across the sort, zero if it did not grow.
    pub fn memory_bytes(&self) -> u64 {
        self.memory_bytes
    }

    /// Copied from [`Algorithm::is_stable`].
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Whether the output was in order. `true` when the check was skipped.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }
}

fn annotated(name: &str, kind: DataSetKind, size: usize) -> String {
    format!("{name} [{}, n={size}]", kind.label())
}

type Observer = Box<dyn FnMut(&BenchmarkResult)>;

/// Runs algorithms and measures them.
///
/// ```
/// use sortbench_core::orst::{benchmark::Harness, QuickSorter};
///
/// let data = vec![5, 4, 3, 2, 1];
/// let result = Harness::new().run(&QuickSorter, &data);
///
/// assert_eq!(result.algorithm(), "Quick Sort");
/// assert!(result.is_sorted());
/// assert_eq!(data, [5, 4, 3, 2, 1]);
/// ```
pub struct Harness<M = ProcessMemory> {
    memory: M,
    check_sorted: bool,
    observer: Option<Observer>,
}

impl Harness<ProcessMemory> {
    /// A harness sampling the memory of this process, with the correctness check on.
    pub fn new() -> Self {
        Self::with_sampler(ProcessMemory::new())
    }
}

impl Default for Harness<ProcessMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemorySampler> Harness<M> {
    pub fn with_sampler(memory: M) -> Self {
        Self {
            memory,
            check_sorted: true,
            observer: None,
        }
    }

    /// Turns the post-sort order check on or off. Skipped checks report the output as sorted.
    pub fn check_sorted(mut self, check: bool) -> Self {
        self.check_sorted = check;
        self
    }

    /// Calls `observer` after every single run, averaged drivers included.
    pub fn observe(mut self, observer: impl FnMut(&BenchmarkResult) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Sorts `data` in place and measures it.
    pub fn measure(&mut self, algorithm: &dyn Algorithm, data: &mut [i32]) -> BenchmarkResult {
        let before = self.memory.sample();
        let start = Instant::now();
        algorithm.sort(data);
        let elapsed = start.elapsed();
        let after = self.memory.sample();

        let sorted = !self.check_sorted || is_sorted(data);
        if !sorted {
            warn!(
                "{} left {} elements out of order",
                algorithm.name(),
                data.len()
            );
        }

        let result = BenchmarkResult::new(
            algorithm.name(),
            elapsed.as_secs_f64() * 1000.0,
            after.saturating_sub(before),
            algorithm.is_stable(),
            sorted,
        );
        debug!(
            "{} sorted {} elements in {:.4} ms, memory delta {} bytes",
            result.algorithm,
            data.len(),
            result.time_ms,
            result.memory_bytes
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&result);
        }
        result
    }

    /// Sorts a copy of `data`, leaving the original untouched.
    pub fn run(&mut self, algorithm: &dyn Algorithm, data: &[i32]) -> BenchmarkResult {
        let mut working = data.to_vec();
        self.measure(algorithm, &mut working)
    }

    /// Runs every algorithm once over the same data.
    pub fn run_all(
        &mut self,
        algorithms: &[Box<dyn Algorithm>],
        data: &[i32],
    ) -> Vec<BenchmarkResult> {
        algorithms
            .iter()
            .map(|algorithm| self.run(algorithm.as_ref(), data))
            .collect()
    }

    /// Runs one algorithm over every size and data set kind, `runs` times each on freshly
    /// generated data, and averages the time and memory of every cell.
    ///
    /// The averaged result counts as sorted only if every run was. A `runs` of zero is treated as
    /// one.
    pub fn run_averaged<R: Rng + ?Sized>(
        &mut self,
        algorithm: &dyn Algorithm,
        sizes: &[usize],
        runs: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Vec<BenchmarkResult> {
        let runs = runs.max(1);
        let mut results = Vec::with_capacity(sizes.len() * DataSetKind::ALL.len());

        for &size in sizes {
            for kind in DataSetKind::ALL {
                info!("{}: {} runs on {} (n={size})", algorithm.name(), runs, kind.label());

                let mut total_ms = 0.0;
                let mut total_bytes = 0u64;
                let mut all_sorted = true;

                for _ in 0..runs {
                    let data = data::generate(kind, size, config, rng);
                    let result = self.run(algorithm, &data);
                    total_ms += result.time_ms;
                    total_bytes = total_bytes.saturating_add(result.memory_bytes);
                    all_sorted &= result.sorted;
                }

                results.push(BenchmarkResult::new(
                    annotated(algorithm.name(), kind, size),
                    total_ms / runs as f64,
                    total_bytes / runs as u64,
                    algorithm.is_stable(),
                    all_sorted,
                ));
            }
        }
        results
    }

    /// For every size and data set kind, generates one data set and runs every algorithm on it.
    /// Labels are annotated with the data set.
    pub fn run_matrix<R: Rng + ?Sized>(
        &mut self,
        algorithms: &[Box<dyn Algorithm>],
        sizes: &[usize],
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Vec<BenchmarkResult> {
        let mut results =
            Vec::with_capacity(sizes.len() * DataSetKind::ALL.len() * algorithms.len());

        for &size in sizes {
            for kind in DataSetKind::ALL {
                info!("running {} algorithms on {} (n={size})", algorithms.len(), kind.label());

                let data = data::generate(kind, size, config, rng);
                results.extend(
                    self.run_all(algorithms, &data)
                        .into_iter()
                        .map(|result| result.annotate(kind, size)),
                );
            }
        }
        results
    }
}

/// Benchmarks one algorithm on a copy of `data` with a fresh process memory sampler.
pub fn run_benchmark(
    algorithm: &dyn Algorithm,
    data: &[i32],
    check_sorted: bool,
) -> BenchmarkResult {
    Harness::new().check_sorted(check_sorted).run(algorithm, data)
}
