use clap::Parser;
use hash_insert_bench::{cli::{execute_benchmark, Cli}, core::BenchError};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = execute_benchmark(&cli) {
        eprintln!("❌ エラー: {error:#}");
        let code = error
            .downcast_ref::<BenchError>()
            .map_or(1, BenchError::exit_code);
        std::process::exit(code);
    }
}
