//! パフォーマンス測定とベンチマークモジュール
//!
//! マッピングへの挿入方法ごとの性能比較を提供

pub mod hash_insert_comparison;

pub use hash_insert_comparison::HashInsertComparison;
