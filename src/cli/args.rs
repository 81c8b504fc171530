use crate::core::BenchResultOf;
use crate::services::{duration_from_secs, BenchConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hash_insert_bench")]
#[command(about = "Compare direct key assignment against merge-based insertion into a map")]
#[command(version)]
pub struct Cli {
    /// Warmup time per case in seconds
    #[arg(short, long, default_value_t = 2.0)]
    pub warmup: f64,

    /// Measurement time per case in seconds
    #[arg(short, long, default_value_t = 5.0)]
    pub time: f64,

    /// Only print the final comparison
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl Cli {
    /// 引数から計測設定を組み立てる
    pub fn to_config(&self) -> BenchResultOf<BenchConfig> {
        let config = BenchConfig::new()
            .with_warmup(duration_from_secs("warmup", self.warmup)?)
            .with_measurement_time(duration_from_secs("time", self.time)?)
            .with_quiet(self.quiet);
        config.validate()?;
        Ok(config)
    }
}
