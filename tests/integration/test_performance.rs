// スループットの大小関係に関する統合テスト
//
// 絶対値はハードウェア依存のため、順序のみを検証する
use crate::fixtures::quick_config;
use hash_insert_bench::{
    services::NoOpReporter,
    workloads::{default_cases, FAST_LABEL, SLOW_LABEL},
    BenchRunner, BenchmarkCase, Comparison,
};
use std::hint::black_box;
use std::time::Duration;

/// `rounds` 回の加算で負荷を作る
fn spin(rounds: u64) -> u64 {
    (0..black_box(rounds)).fold(0, |acc, x| black_box(acc.wrapping_add(x)))
}

#[test]
fn test_cost_ratio_is_reflected_in_throughput() {
    let runner = BenchRunner::new(quick_config(), NoOpReporter::new());
    let cases = [
        BenchmarkCase::new("heavy", || spin(20_000)),
        BenchmarkCase::new("light", || spin(200)),
    ];

    let results = runner.run(&cases).unwrap();

    assert!(results[1].iterations_per_second > results[0].iterations_per_second);
    let comparison = Comparison::from_results(&results);
    assert_eq!(comparison.fastest().unwrap().name, "light");
    assert!(comparison.entries[1].slowdown.unwrap() > 1.0);
}

#[test]
fn test_index_assignment_beats_merge() {
    let config = quick_config().with_measurement_time(Duration::from_millis(300));
    let runner = BenchRunner::new(config, NoOpReporter::new());

    let results = runner.run(&default_cases()).unwrap();
    let comparison = Comparison::from_results(&results);

    assert_eq!(comparison.fastest().unwrap().name, FAST_LABEL);
    assert_eq!(comparison.slowest().unwrap().name, SLOW_LABEL);
    assert!(comparison
        .summary_line()
        .unwrap()
        .starts_with("Hash#[]= is"));
}
