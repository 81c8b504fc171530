// BenchRunner - ウォームアップ後に一定時間ケースを繰り返し実行する計測器

use super::case::BenchmarkCase;
use crate::{
    core::{BenchError, BenchReporter, BenchResult, BenchResultOf, Comparison},
    services::BenchConfig,
};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// ベンチマーク実行器
///
/// ケースは登録順に1つずつ計測する。
/// いずれかのケースがパニックした時点で実行全体を打ち切る。
pub struct BenchRunner<R> {
    config: BenchConfig,
    reporter: R,
}

impl<R: BenchReporter> BenchRunner<R> {
    pub fn new(config: BenchConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// 全ケースを計測し、比較結果を報告する
    pub fn run(&self, cases: &[BenchmarkCase]) -> BenchResultOf<Vec<BenchResult>> {
        self.config.validate()?;
        if cases.is_empty() {
            return Err(BenchError::EmptyRun);
        }

        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let result = self.run_case(case)?;
            self.reporter.report_case(&result);
            results.push(result);
        }

        let comparison = Comparison::from_results(&results);
        self.reporter.report_comparison(&comparison);
        Ok(results)
    }

    /// 1ケースをウォームアップ・計測する
    pub fn run_case(&self, case: &BenchmarkCase) -> BenchResultOf<BenchResult> {
        self.reporter.report_started(case.name());

        let cycles = self.warmup(case)?;
        self.reporter.report_warmup(case.name(), cycles);

        let samples = self.measure(case, cycles)?;
        Ok(BenchResult::from_samples(case.name(), &samples))
    }

    /// ウォームアップを行い、1サンプルあたりの実行回数を返す
    fn warmup(&self, case: &BenchmarkCase) -> BenchResultOf<u64> {
        let warmup = self.config.warmup();
        let start = Instant::now();
        let mut iterations: u64 = 0;

        while start.elapsed() < warmup {
            guarded(case, 1)?;
            iterations += 1;
        }

        Ok(cycles_per_sample(
            iterations,
            start.elapsed(),
            self.config.sample_interval(),
        ))
    }

    /// 計測時間に達するまでサンプルを取り続ける（最低1サンプル）
    fn measure(&self, case: &BenchmarkCase, cycles: u64) -> BenchResultOf<Vec<(u64, Duration)>> {
        let measurement_time = self.config.measurement_time();
        let start = Instant::now();
        let mut samples = Vec::new();

        loop {
            let sample_start = Instant::now();
            guarded(case, cycles)?;
            samples.push((cycles, sample_start.elapsed()));

            if start.elapsed() >= measurement_time {
                break;
            }
        }

        Ok(samples)
    }
}

/// パニックをエラーに変換しながらケースを実行する
fn guarded(case: &BenchmarkCase, cycles: u64) -> BenchResultOf<()> {
    panic::catch_unwind(AssertUnwindSafe(|| case.invoke_n(cycles)))
        .map_err(|payload| BenchError::routine_panicked(case.name(), payload.as_ref()))
}

/// ウォームアップ実績からサンプル間隔あたりの実行回数を見積もる
pub(crate) fn cycles_per_sample(iterations: u64, elapsed: Duration, interval: Duration) -> u64 {
    if iterations == 0 || elapsed.is_zero() {
        return 1;
    }

    let per_interval = iterations as f64 * interval.as_secs_f64() / elapsed.as_secs_f64();
    (per_interval.round() as u64).max(1)
}
