// 計測設定の具象実装

use crate::core::{BenchError, BenchResultOf};
use std::time::Duration;

/// 計測時間の設定
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    warmup: Duration,
    measurement_time: Duration,
    sample_interval: Duration,
    quiet: bool,
}

impl BenchConfig {
    pub const DEFAULT_WARMUP: Duration = Duration::from_secs(2);
    pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(5);
    pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn with_measurement_time(mut self, measurement_time: Duration) -> Self {
        self.measurement_time = measurement_time;
        self
    }

    pub fn with_sample_interval(mut self, sample_interval: Duration) -> Self {
        self.sample_interval = sample_interval;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn warmup(&self) -> Duration {
        self.warmup
    }

    pub fn measurement_time(&self) -> Duration {
        self.measurement_time
    }

    pub fn sample_interval(&self) -> Duration {
        self.sample_interval
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// 設定値の検証
    ///
    /// ウォームアップは0でもよい（その場合サンプルあたり1回）
    pub fn validate(&self) -> BenchResultOf<()> {
        if self.measurement_time.is_zero() {
            return Err(BenchError::configuration(
                "measurement_time",
                "0より大きい必要があります",
            ));
        }
        if self.sample_interval.is_zero() {
            return Err(BenchError::configuration(
                "sample_interval",
                "0より大きい必要があります",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup: Self::DEFAULT_WARMUP,
            measurement_time: Self::DEFAULT_MEASUREMENT_TIME,
            sample_interval: Self::DEFAULT_SAMPLE_INTERVAL,
            quiet: false,
        }
    }
}

/// 秒数（小数可）を `Duration` に変換する
pub fn duration_from_secs(field: &str, secs: f64) -> BenchResultOf<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| BenchError::configuration(field, format!("{secs} は無効な秒数です: {e}")))
}
