//! 計測対象のワークロード
//!
//! 同じマッピング（1..=100 の各整数をそれ自身へ）を2通りの挿入方法で組み立てる:
//! - `insert_by_index`: キーを直接書き込む
//! - `insert_by_merge`: 1要素のマッピングを毎回作ってマージする

use crate::engine::BenchmarkCase;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// 整数キーから整数値へのマッピング
pub type Mapping = HashMap<i64, i64>;

/// 計測で使うキー範囲
pub const INSERT_RANGE: RangeInclusive<i64> = 1..=100;

/// 直接代入ケースの表示名
pub const FAST_LABEL: &str = "Hash#[]=   ";

/// マージケースの表示名
pub const SLOW_LABEL: &str = "Hash#merge!";

/// 各キーを直接代入してマッピングを組み立てる
pub fn insert_by_index(range: RangeInclusive<i64>) -> Mapping {
    let mut mapping = Mapping::new();
    for e in range {
        mapping.insert(e, e);
    }
    mapping
}

/// 各キーごとに1要素のマッピングを作り、累積側へマージする
pub fn insert_by_merge(range: RangeInclusive<i64>) -> Mapping {
    range.fold(Mapping::new(), |mut acc, e| {
        acc.extend(Mapping::from([(e, e)]));
        acc
    })
}

/// `INSERT_RANGE` に対する直接代入
pub fn fast() -> Mapping {
    insert_by_index(INSERT_RANGE)
}

/// `INSERT_RANGE` に対するマージ
pub fn slow() -> Mapping {
    insert_by_merge(INSERT_RANGE)
}

/// 既定の2ケース（fast, slow の順）
pub fn default_cases() -> Vec<BenchmarkCase> {
    vec![
        BenchmarkCase::new(FAST_LABEL, fast),
        BenchmarkCase::new(SLOW_LABEL, slow),
    ]
}
