use colored::Colorize;
use prettytable::{row, Table};
use sortbench_core::orst::benchmark::BenchmarkResult;
use sortbench_core::orst::Algorithm;

/// One row per result: label, time, memory delta, stability and the correctness check.
pub fn results_table(results: &[BenchmarkResult]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Algorithm".bold(),
        "Time (ms)".bold(),
        "Memory (bytes)".bold(),
        "Stable".bold(),
        "Sorted".bold()
    ]);

    for result in results {
        let sorted = if result.is_sorted() {
            "Yes".green()
        } else {
            "No".red().bold()
        };

        table.add_row(row![
            result.algorithm(),
            format!("{:.4}", result.time_ms()),
            result.memory_bytes().to_string(),
            yes_no(result.is_stable()),
            sorted
        ]);
    }
    table
}

/// The static facts about every algorithm.
pub fn complexity_table(algorithms: &[Box<dyn Algorithm>]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Algorithm".bold(),
        "Best Case".bold(),
        "Average Case".bold(),
        "Worst Case".bold(),
        "Space".bold(),
        "Stable".bold()
    ]);

    for algorithm in algorithms {
        table.add_row(row![
            algorithm.name(),
            algorithm.best_case(),
            algorithm.average_case(),
            algorithm.worst_case(),
            algorithm.space_complexity(),
            yes_no(algorithm.is_stable())
        ]);
    }
    table
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
