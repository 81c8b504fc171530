// 計測結果の永続化
// JSONレポート出力

pub mod implementations;

// 公開API
pub use implementations::{export_json_report, JsonReport};
