// ベンチマーク結果に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 1ケース分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub iterations: u64,
    pub elapsed: Duration,
    pub iterations_per_second: f64,
    pub samples: usize,
    /// サンプルごとのips標準偏差（平均に対する百分率）
    pub stddev_percent: f64,
}

impl BenchResult {
    /// サンプル列から結果を組み立てる
    ///
    /// 各サンプルは `(反復回数, 所要時間)` の組
    pub fn from_samples(name: impl Into<String>, samples: &[(u64, Duration)]) -> Self {
        let iterations: u64 = samples.iter().map(|(count, _)| count).sum();
        let elapsed: Duration = samples.iter().map(|(_, time)| *time).sum();

        let iterations_per_second = if elapsed.as_secs_f64() > 0.0 {
            iterations as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        let rates: Vec<f64> = samples
            .iter()
            .filter(|(_, time)| time.as_secs_f64() > 0.0)
            .map(|(count, time)| *count as f64 / time.as_secs_f64())
            .collect();

        Self {
            name: name.into(),
            iterations,
            elapsed,
            iterations_per_second,
            samples: samples.len(),
            stddev_percent: stddev_percent(&rates),
        }
    }
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>20} {:>12} (±{:>4.1}%) i/s - {:>10} times in {:.6}s",
            self.name,
            format_ips(self.iterations_per_second),
            self.stddev_percent,
            self.iterations,
            self.elapsed.as_secs_f64()
        )
    }
}

/// 標本標準偏差を平均に対する百分率で返す
fn stddev_percent(rates: &[f64]) -> f64 {
    if rates.len() < 2 {
        return 0.0;
    }

    let mean = rates.iter().sum::<f64>() / rates.len() as f64;
    if mean <= 0.0 {
        return 0.0;
    }

    let variance = rates.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (rates.len() - 1) as f64;
    variance.sqrt() / mean * 100.0
}

/// ipsを k/M/B/T 接尾辞付きで整形する
pub fn format_ips(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "k")];

    for (scale, suffix) in UNITS {
        if value >= scale {
            return format!("{:.3}{suffix}", value / scale);
        }
    }
    format!("{value:.3}")
}

/// 比較表の1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub iterations_per_second: f64,
    /// 最速ケースに対して何倍遅いか（最速ケース自身は `None`）
    pub slowdown: Option<f64>,
}

/// 全ケースの比較結果（ips降順）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    pub fn from_results(results: &[BenchResult]) -> Self {
        let mut sorted: Vec<&BenchResult> = results.iter().collect();
        sorted.sort_by(|a, b| b.iterations_per_second.total_cmp(&a.iterations_per_second));

        let fastest_ips = sorted.first().map(|r| r.iterations_per_second);

        let entries = sorted
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let slowdown = match (index, fastest_ips) {
                    (0, _) | (_, None) => None,
                    (_, Some(best)) if result.iterations_per_second > 0.0 => {
                        Some(best / result.iterations_per_second)
                    }
                    _ => Some(f64::INFINITY),
                };
                ComparisonEntry {
                    name: result.name.clone(),
                    iterations_per_second: result.iterations_per_second,
                    slowdown,
                }
            })
            .collect();

        Self { entries }
    }

    /// 最速ケース
    pub fn fastest(&self) -> Option<&ComparisonEntry> {
        self.entries.first()
    }

    /// 最遅ケース（2ケース以上ある場合のみ）
    pub fn slowest(&self) -> Option<&ComparisonEntry> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.last()
    }

    /// "X is N times as fast as Y" 形式の要約
    pub fn summary_line(&self) -> Option<String> {
        let fastest = self.fastest()?;
        let slowest = self.slowest()?;
        let ratio = slowest.slowdown?;

        Some(format!(
            "{} is {:.2} times as fast as {}",
            fastest.name.trim(),
            ratio,
            slowest.name.trim()
        ))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison:")?;
        for entry in &self.entries {
            write!(
                f,
                "{:>20}: {:>12} i/s",
                entry.name,
                format_ips(entry.iterations_per_second)
            )?;
            if let Some(slowdown) = entry.slowdown {
                write!(f, " - {slowdown:.2}x  slower")?;
            }
            writeln!(f)?;
        }
        if let Some(summary) = self.summary_line() {
            writeln!(f, "{summary}")?;
        }
        Ok(())
    }
}
