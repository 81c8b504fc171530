pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod workloads;

pub use crate::benchmarks::HashInsertComparison;
pub use crate::core::{BenchError, BenchReporter, BenchResult, Comparison};
pub use crate::engine::{BenchRunner, BenchmarkCase};
pub use crate::services::{BenchConfig, ConsoleReporter, NoOpReporter};
