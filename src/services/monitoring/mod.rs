// 計測結果の報告機能
// ケースごとの結果と比較結果の出力

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
