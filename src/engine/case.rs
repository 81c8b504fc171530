// 計測対象ケースの定義

use std::fmt;
use std::hint::black_box;

/// 名前付きの引数なし計測対象
///
/// 戻り値は `black_box` を通して捨てられるため、最適化で処理が消えることはない
pub struct BenchmarkCase {
    name: String,
    routine: Box<dyn Fn()>,
}

impl BenchmarkCase {
    pub fn new<F, T>(name: impl Into<String>, routine: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            name: name.into(),
            routine: Box::new(move || {
                black_box(routine());
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1回実行
    #[inline]
    pub fn invoke(&self) {
        (self.routine)()
    }

    /// 指定回数だけ連続実行
    #[inline]
    pub fn invoke_n(&self, cycles: u64) {
        for _ in 0..cycles {
            (self.routine)();
        }
    }
}

impl fmt::Debug for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
