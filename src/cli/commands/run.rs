use crate::benchmarks::HashInsertComparison;
use crate::cli::Cli;
use crate::services::ConsoleReporter;
use anyhow::Result;

/// Run the insertion benchmark described by the command line
pub fn execute_benchmark(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;

    let reporter = if config.quiet() {
        ConsoleReporter::quiet()
    } else {
        println!("🚀 Hash insertion benchmark");
        println!(
            "⚙️  warmup: {:?}, time: {:?}",
            config.warmup(),
            config.measurement_time()
        );
        println!("{}", "=".repeat(60));
        ConsoleReporter::new()
    };

    let mut comparison = HashInsertComparison::new(config);
    comparison.run_full_comparison(reporter)?;

    if let Some(path) = &cli.json {
        comparison.export_json_report(path)?;
        println!("📄 Report written to {}", path.display());
    }

    if comparison.index_assignment_wins() == Some(false) {
        println!("⚠️  Merge-based insertion outran direct assignment on this run");
    }

    Ok(())
}
