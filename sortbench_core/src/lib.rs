//! # Introduction
//!
//! Classic in-memory sorting algorithms unified behind one contract, and the harness that times
//! them, samples process memory around them and checks their output.
//!
//! The pieces, leaves first:
//!
//! - [`orst`] holds the eleven sorters and the [`orst::Algorithm`] descriptor they satisfy.
//! - [`data`] generates the synthetic integer sequences the benchmarks run on.
//! - [`memory`] samples the resident memory of the current process.
//! - [`orst::benchmark`] runs one algorithm over one data set and aggregates many such runs.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sortbench_core::data::{self, DataSetKind, GeneratorConfig};
//! use sortbench_core::orst::{benchmark::Harness, AlgorithmKind};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let values = data::generate(DataSetKind::Random, 500, &GeneratorConfig::default(), &mut rng);
//!
//! let algorithms = AlgorithmKind::all();
//! let results = Harness::new().run_all(&algorithms, &values);
//!
//! assert_eq!(results.len(), 11);
//! assert!(results.iter().all(|result| result.is_sorted()));
//! ```

pub mod data;
pub mod error;
pub mod memory;
pub mod orst;
