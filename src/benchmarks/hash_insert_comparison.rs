//! 直接代入とマージの挿入性能比較
//!
//! 既定の2ケースを計測し、結果の保持とレポート出力を提供

use crate::{
    core::{BenchReporter, BenchResult, BenchResultOf, Comparison},
    engine::BenchRunner,
    services::{export_json_report, BenchConfig},
    workloads::{default_cases, FAST_LABEL},
};
use std::path::Path;

/// 挿入方法の比較テストスイート
pub struct HashInsertComparison {
    config: BenchConfig,
    results: Vec<BenchResult>,
}

impl HashInsertComparison {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            results: Vec::new(),
        }
    }

    pub fn results(&self) -> &[BenchResult] {
        &self.results
    }

    /// 既定ケースを計測して結果を保持する
    pub fn run_full_comparison<R: BenchReporter>(
        &mut self,
        reporter: R,
    ) -> BenchResultOf<&[BenchResult]> {
        let runner = BenchRunner::new(self.config.clone(), reporter);
        self.results = runner.run(&default_cases())?;
        Ok(&self.results)
    }

    pub fn comparison(&self) -> Comparison {
        Comparison::from_results(&self.results)
    }

    /// 直接代入がマージより速かったか（未計測なら `None`）
    pub fn index_assignment_wins(&self) -> Option<bool> {
        self.comparison()
            .fastest()
            .map(|fastest| fastest.name == FAST_LABEL)
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> BenchResultOf<()> {
        export_json_report(path, &self.results)
    }
}

impl Default for HashInsertComparison {
    fn default() -> Self {
        Self::new(BenchConfig::default())
    }
}
