// 計測結果報告の具象実装

use crate::core::{BenchReporter, BenchResult, Comparison};

/// コンソール出力による報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 比較結果のみを出力する
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl BenchReporter for ConsoleReporter {
    fn report_started(&self, name: &str) {
        if !self.quiet {
            println!("🔬 Warming up {}...", name.trim());
        }
    }

    fn report_warmup(&self, name: &str, cycles_per_sample: u64) {
        if !self.quiet {
            println!("   {name:>20} {cycles_per_sample:>12} i/sample");
        }
    }

    fn report_case(&self, result: &BenchResult) {
        if !self.quiet {
            println!("📊 {result}");
        }
    }

    fn report_comparison(&self, comparison: &Comparison) {
        println!();
        print!("{comparison}");
        if let Some(fastest) = comparison.fastest() {
            println!("🏆 Fastest: {}", fastest.name.trim());
        }
    }
}

/// 何もしない報告実装（テスト・ライブラリ利用向け）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchReporter for NoOpReporter {
    fn report_started(&self, _name: &str) {
        // 何もしない
    }

    fn report_warmup(&self, _name: &str, _cycles_per_sample: u64) {
        // 何もしない
    }

    fn report_case(&self, _result: &BenchResult) {
        // 何もしない
    }

    fn report_comparison(&self, _comparison: &Comparison) {
        // 何もしない
    }
}
