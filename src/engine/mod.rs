// エンジン層 - 計測ケースと実行器
// サービス層を組み合わせて計測全体を制御する

pub mod case;
pub mod runner;

// 公開API
pub use case::BenchmarkCase;
pub use runner::BenchRunner;
