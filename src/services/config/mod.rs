// 計測設定の管理
// ウォームアップ・計測時間・サンプル間隔

pub mod implementations;

// 公開API
pub use implementations::{duration_from_secs, BenchConfig};
