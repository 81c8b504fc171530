// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{BenchError, BenchResultOf};
pub use traits::{BenchReporter, MockBenchReporter};
pub use types::{format_ips, BenchResult, Comparison, ComparisonEntry};
