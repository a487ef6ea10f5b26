//! # Introduction
//!
//! The command line front end of [`sortbench_core`]: it picks what to benchmark from the
//! arguments, shows progress while the harness runs, prints the results as tables and saves
//! them to disk.

pub mod export;
pub mod table;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use sortbench_core::data::{self, DataSetKind, GeneratorConfig};
use sortbench_core::orst::benchmark::{BenchmarkResult, Harness};
use sortbench_core::orst::{Algorithm, AlgorithmKind};

use export::Format;

const DEFAULT_SIZES: [usize; 4] = [1000, 10_000, 100_000, 1_000_000];

/// Benchmark the sorting algorithms. Install the `sortbench` binary and run `sortbench bench` to
/// see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct BenchArgs {
    #[command(subcommand)]
    command: BenchCommands,

    #[command(flatten)]
    options: BenchOptions,
}

#[derive(Clone, Subcommand, Debug)]
enum BenchCommands {
    /// Run every algorithm once on random data.
    Quick {
        /// Number of elements to sort
        #[arg(short, long, default_value_t = 1000)]
        size: usize,
    },

    /// Run every algorithm on every kind of data set, for each size. This may take a while.
    Full {
        /// Comma separated list of sizes
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,
    },

    /// Average one algorithm over several runs on every kind of data set.
    Single {
        /// The algorithm to benchmark, e.g. `merge` or `tim`
        algorithm: AlgorithmKind,

        /// Comma separated list of sizes
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// Runs per size and data set kind, each on fresh data
        #[arg(short, long, default_value_t = 10)]
        runs: usize,
    },

    /// Run every algorithm once on a data set of your choice.
    Custom {
        /// Number of elements to sort
        #[arg(short, long)]
        size: usize,

        /// random, ascending, descending or partial
        #[arg(short, long, default_value_t = DataSetKind::Random)]
        kind: DataSetKind,
    },
}

#[derive(Clone, Debug, Args)]
struct BenchOptions {
    /// Seed for the data generators, for reproducible data sets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File to save the results in. Named after the benchmark by default
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Format of the saved results
    #[arg(long, value_enum, global = true, default_value_t = Format::Csv)]
    format: Format,

    /// Print the results only, do not save them
    #[arg(long, global = true)]
    no_export: bool,

    /// Do not check that the output of every run is sorted
    #[arg(long, global = true)]
    no_check: bool,

    /// Leave out the O(n²) algorithms for sizes above this
    #[arg(long, global = true, value_name = "SIZE")]
    skip_quadratic_above: Option<usize>,
}

/// Whether the average case of `algorithm` grows with the square of the input.
pub fn is_quadratic(algorithm: &dyn Algorithm) -> bool {
    algorithm.average_case() == "O(n²)"
}

/// Prints the name, complexity classes and stability of every algorithm.
pub fn list_algorithms() {
    table::complexity_table(&AlgorithmKind::all()).printstd();
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let options = self.options;
        let config = GeneratorConfig::default();
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (results, skipped, stem) = match self.command {
            BenchCommands::Quick { size } => {
                print_heading("Quick test on random data, n =", size);
                let data = data::generate(DataSetKind::Random, size, &config, &mut rng);
                let (algorithms, skipped) = options.eligible(size);

                let bar = progress(algorithms.len(), "Quick test")?;
                let results = options.harness(&bar).run_all(&algorithms, &data);
                bar.finish_and_clear();

                (results, skipped, String::from("quick_test_results"))
            }

            BenchCommands::Full { sizes } => {
                let plan = sizes
                    .iter()
                    .map(|&size| (size, options.eligible(size)))
                    .collect::<Vec<_>>();
                let total = plan
                    .iter()
                    .map(|(_, (algorithms, _))| algorithms.len() * DataSetKind::ALL.len())
                    .sum::<usize>();

                let bar = progress(total, "Full benchmark")?;
                let mut harness = options.harness(&bar);
                let mut results = Vec::with_capacity(total);
                let mut skipped = Vec::new();

                for (size, (algorithms, left_out)) in plan {
                    bar.println(format!("Testing with data size: {size}"));
                    results.extend(harness.run_matrix(&algorithms, &[size], &config, &mut rng));
                    skipped.extend(
                        left_out
                            .into_iter()
                            .map(|name| format!("{name} [n={size}]")),
                    );
                }
                bar.finish_and_clear();

                (results, skipped, String::from("full_benchmark_results"))
            }

            BenchCommands::Single {
                algorithm,
                sizes,
                runs,
            } => {
                let algorithm = algorithm.build();
                let (kept, left_out): (Vec<usize>, Vec<usize>) = sizes
                    .iter()
                    .copied()
                    .partition(|&size| !options.skips(algorithm.as_ref(), size));

                let total = kept.len() * DataSetKind::ALL.len() * runs.max(1);
                let bar = progress(total, algorithm.name())?;
                let results = options.harness(&bar).run_averaged(
                    algorithm.as_ref(),
                    &kept,
                    runs,
                    &config,
                    &mut rng,
                );
                bar.finish_and_clear();

                let skipped = left_out
                    .into_iter()
                    .map(|size| format!("{} [n={size}]", algorithm.name()))
                    .collect();
                (results, skipped, format!("{}_benchmark", algorithm.name()))
            }

            BenchCommands::Custom { size, kind } => {
                print_heading(&format!("Custom test on {} data, n =", kind.label()), size);
                let data = data::generate(kind, size, &config, &mut rng);
                let (algorithms, skipped) = options.eligible(size);

                let bar = progress(algorithms.len(), "Custom test")?;
                let results = options.harness(&bar).run_all(&algorithms, &data);
                bar.finish_and_clear();

                (results, skipped, String::from("custom_test_results"))
            }
        };

        table::results_table(&results).printstd();
        if !skipped.is_empty() {
            println!(
                "{} {}",
                "Skipped (quadratic):".yellow().bold(),
                skipped.join(", ")
            );
        }

        if !options.no_export {
            options.export(&results, &stem);
        }
        Ok(())
    }
}

impl BenchOptions {
    fn harness(&self, bar: &ProgressBar) -> Harness {
        let bar = bar.clone();
        Harness::new()
            .check_sorted(!self.no_check)
            .observe(move |_| bar.inc(1))
    }

    fn skips(&self, algorithm: &dyn Algorithm, size: usize) -> bool {
        self.skip_quadratic_above
            .is_some_and(|limit| size > limit && is_quadratic(algorithm))
    }

    /// Splits the registry into the algorithms to run on `size` elements and the names of the
    /// ones left out.
    fn eligible(&self, size: usize) -> (Vec<Box<dyn Algorithm>>, Vec<String>) {
        let mut kept = Vec::new();
        let mut skipped = Vec::new();

        for algorithm in AlgorithmKind::all() {
            if self.skips(algorithm.as_ref(), size) {
                info!("skipping {} for n={size}", algorithm.name());
                skipped.push(algorithm.name().to_string());
            } else {
                kept.push(algorithm);
            }
        }
        (kept, skipped)
    }

    /// Saves the results. A failure is reported, never propagated: the results were already
    /// printed.
    fn export(&self, results: &[BenchmarkResult], stem: &str) {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| export::default_path(stem, self.format));

        match export::save(results, &path, self.format) {
            Ok(()) => println!("{} {}", "Results saved to".green(), path.display()),
            Err(err) => {
                error!("saving results to {} failed: {err:#}", path.display());
                eprintln!("{} {err:#}", "Could not save the results:".red().bold());
            }
        }
    }
}

fn print_heading(text: &str, size: usize) {
    println!(
        "{} {}",
        text.bold().underline().blue(),
        size.to_string().bold()
    );
}

fn progress(total: usize, message: &str) -> anyhow::Result<ProgressBar> {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(ProgressStyle::with_template(
        "{msg} -> {spinner:.green} [{elapsed_precise}] {bar:50.cyan/blue} {pos}/{len} runs, ETA: {eta}",
    )?);
    bar.set_message(message.to_string());
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        bench: BenchArgs,
    }

    fn parse(args: &[&str]) -> BenchArgs {
        TestCli::try_parse_from(std::iter::once("bench").chain(args.iter().copied()))
            .unwrap()
            .bench
    }

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        TestCli::command().debug_assert()
    }

    #[test]
    fn full_uses_the_default_sizes() {
        let args = parse(&["full"]);
        match args.command {
            BenchCommands::Full { sizes } => assert_eq!(sizes, DEFAULT_SIZES),
            other => panic!("parsed {other:?}"),
        }
        assert_eq!(args.options.format, Format::Csv);
        assert!(!args.options.no_check);
    }

    #[test]
    fn single_with_options_after_the_subcommand() {
        let args = parse(&[
            "single", "HEAP", "--sizes", "10,20", "--runs", "3", "--seed", "7", "--format",
            "yaml",
        ]);
        match args.command {
            BenchCommands::Single {
                algorithm,
                sizes,
                runs,
            } => {
                assert_eq!(algorithm, AlgorithmKind::Heap);
                assert_eq!(sizes, [10, 20]);
                assert_eq!(runs, 3);
            }
            other => panic!("parsed {other:?}"),
        }
        assert_eq!(args.options.seed, Some(7));
        assert_eq!(args.options.format, Format::Yaml);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let parsed = TestCli::try_parse_from(["bench", "single", "shell"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn custom_needs_a_size() {
        assert!(TestCli::try_parse_from(["bench", "custom"]).is_err());

        let args = parse(&["custom", "--size", "5", "--kind", "desc"]);
        match args.command {
            BenchCommands::Custom { size, kind } => {
                assert_eq!(size, 5);
                assert_eq!(kind, DataSetKind::Descending);
            }
            other => panic!("parsed {other:?}"),
        }
    }

    #[test]
    fn quadratic_classes() {
        let quadratic = AlgorithmKind::all()
            .iter()
            .filter(|algorithm| is_quadratic(algorithm.as_ref()))
            .map(|algorithm| algorithm.name())
            .collect::<Vec<_>>();

        assert_eq!(
            quadratic,
            [
                "Bubble Sort",
                "Insertion Sort",
                "Selection Sort",
                "Cocktail Shaker Sort"
            ]
        );
    }

    #[test]
    fn eligible_leaves_out_quadratic_above_the_limit() {
        let args = parse(&["quick", "--skip-quadratic-above", "100"]);

        let (kept, skipped) = args.options.eligible(100);
        assert_eq!(kept.len(), 11);
        assert!(skipped.is_empty());

        let (kept, skipped) = args.options.eligible(101);
        assert_eq!(kept.len(), 7);
        assert_eq!(skipped.len(), 4);
        assert!(skipped.contains(&String::from("Bubble Sort")));
    }

    #[test]
    fn custom_run_saves_json() {
        let path = std::env::temp_dir().join(format!("sortbench_custom_{}.json", std::process::id()));
        let path_arg = path.to_string_lossy().into_owned();

        parse(&[
            "custom", "--size", "64", "--kind", "partial", "--seed", "1", "--format", "json",
            "--output", path_arg.as_str(),
        ])
        .run()
        .unwrap();

        let saved: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        let rows = saved.as_array().unwrap();
        assert_eq!(rows.len(), 11);
        assert!(rows.iter().all(|row| row["sorted"] == true));
    }

    #[test]
    fn export_failure_does_not_fail_the_run() {
        let path = std::env::temp_dir()
            .join("sortbench_no_such_directory")
            .join("out.csv");
        let path_arg = path.to_string_lossy().into_owned();

        let outcome = parse(&["quick", "--size", "16", "--output", path_arg.as_str()]).run();
        assert!(outcome.is_ok());
        assert!(!path.exists());
    }
}
