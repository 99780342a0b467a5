//! Example benchmark module: two benchmarked methods, one report.
//!
//! Run with `cargo run --example benchmarks`, then inspect
//! `reports/benchmarks.json`.

use stridebench::prelude::*;

fn busy_sum(upper: u64) -> u64 {
    (0..upper).fold(0u64, |acc, i| acc.wrapping_add(i * i))
}

fn main() -> anyhow::Result<()> {
    let mut plugin = BenchmarkPlugin::new();

    let runner = BenchRunner::new(
        BenchConfig::new(10).warmup_rounds(2).threads(3),
        "testSmallSum",
        "Example",
    );
    plugin.record(runner.run(|| {
        std::hint::black_box(busy_sum(100_000));
    })?);

    let runner = BenchRunner::new(
        BenchConfig::new(10).warmup_rounds(2).threads(5),
        "testLargeSum",
        "Example",
    );
    plugin.record(runner.run(|| {
        std::hint::black_box(busy_sum(1_000_000));
    })?);

    if let Some(path) = plugin.context_finished(Some("benchmarks"))? {
        println!("report written to {}", path.display());
    }
    Ok(())
}
