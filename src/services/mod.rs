// サービス層 - 機能別の実装
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod persistence;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{duration_from_secs, BenchConfig};
pub use monitoring::{ConsoleReporter, NoOpReporter};
pub use persistence::{export_json_report, JsonReport};
