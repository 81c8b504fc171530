// ベンチマークシステムのトレイト定義

use super::types::{BenchResult, Comparison};
use mockall::automock;

/// 計測の進捗と結果の報告を抽象化するトレイト
#[automock]
pub trait BenchReporter {
    /// ケースの計測開始時の報告
    fn report_started(&self, name: &str);

    /// ウォームアップ完了時の報告
    fn report_warmup(&self, name: &str, cycles_per_sample: u64);

    /// ケース計測完了時の報告
    fn report_case(&self, result: &BenchResult);

    /// 全ケースの比較結果の報告
    fn report_comparison(&self, comparison: &Comparison);
}

impl<R: BenchReporter + ?Sized> BenchReporter for &R {
    fn report_started(&self, name: &str) {
        (**self).report_started(name)
    }

    fn report_warmup(&self, name: &str, cycles_per_sample: u64) {
        (**self).report_warmup(name, cycles_per_sample)
    }

    fn report_case(&self, result: &BenchResult) {
        (**self).report_case(result)
    }

    fn report_comparison(&self, comparison: &Comparison) {
        (**self).report_comparison(comparison)
    }
}
