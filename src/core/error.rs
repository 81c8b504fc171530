// ベンチマーク実行時のエラー型定義

use std::path::PathBuf;
use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("ベンチマーク対象がパニックしました: {name} - {message}")]
    RoutinePanicked { name: String, message: String },

    #[error("設定エラー: {field} - {reason}")]
    ConfigurationError { field: String, reason: String },

    #[error("レポート出力エラー: {} - {source}", path.display())]
    ReportError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("ベンチマーク対象が登録されていません")]
    EmptyRun,
}

impl BenchError {
    /// パニックエラーの作成
    ///
    /// `catch_unwind` が返すペイロードから可能な限りメッセージを取り出す
    pub fn routine_panicked(
        name: impl Into<String>,
        payload: &(dyn std::any::Any + Send),
    ) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        Self::RoutinePanicked {
            name: name.into(),
            message,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::ReportError {
            path: path.into(),
            source,
        }
    }

    /// 終了コード
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RoutinePanicked { .. } => 101,
            Self::ConfigurationError { .. } | Self::EmptyRun => 2,
            Self::ReportError { .. } => 1,
        }
    }
}

/// ベンチマーク処理の結果型
pub type BenchResultOf<T> = std::result::Result<T, BenchError>;
