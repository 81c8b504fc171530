// 計測結果のJSONレポート出力

use crate::core::{BenchError, BenchResult, BenchResultOf, Comparison};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSONレポートの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub timestamp: String,
    pub results: Vec<BenchResult>,
    pub comparison: Comparison,
    pub summary: Option<String>,
}

impl JsonReport {
    pub fn new(results: &[BenchResult]) -> Self {
        let comparison = Comparison::from_results(results);
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            results: results.to_vec(),
            summary: comparison.summary_line(),
            comparison,
        }
    }
}

/// 計測結果をJSONファイルとして書き出す
pub fn export_json_report(path: &Path, results: &[BenchResult]) -> BenchResultOf<()> {
    let report = JsonReport::new(results);

    let json = serde_json::to_string_pretty(&report)
        .context("レポートのシリアライズに失敗しました")
        .map_err(|e| BenchError::report(path, e))?;

    std::fs::write(path, json)
        .with_context(|| format!("ファイルを書き込めません: {}", path.display()))
        .map_err(|e| BenchError::report(path, e))?;

    Ok(())
}
