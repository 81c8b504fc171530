// エラーハンドリングの統合テスト
use crate::fixtures::{quick_config, RecordingReporter, ReportEvent};
use hash_insert_bench::{
    core::BenchError, services::NoOpReporter, workloads::fast, BenchRunner, BenchmarkCase,
    HashInsertComparison,
};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_panicking_case_fails_fast_without_partial_results() {
    let reporter = RecordingReporter::new();
    let runner = BenchRunner::new(quick_config(), &reporter);
    let cases = [
        BenchmarkCase::new("ok", fast),
        BenchmarkCase::new("broken", || -> i64 {
            let values: Vec<i64> = Vec::new();
            values[3]
        }),
        BenchmarkCase::new("after", fast),
    ];

    let error = runner.run(&cases).unwrap_err();

    assert!(matches!(error, BenchError::RoutinePanicked { ref name, .. } if name == "broken"));
    assert_ne!(error.exit_code(), 0);

    let events = reporter.events();
    assert!(events.contains(&ReportEvent::Case("ok".to_string())));
    assert!(!events.contains(&ReportEvent::Started("after".to_string())));
    assert!(!events.iter().any(|e| matches!(e, ReportEvent::Comparison(_))));
}

#[test]
fn test_zero_sample_interval_is_configuration_error() {
    let config = quick_config().with_sample_interval(Duration::ZERO);
    let runner = BenchRunner::new(config, NoOpReporter::new());

    let error = runner.run(&[BenchmarkCase::new("x", fast)]).unwrap_err();

    assert!(matches!(error, BenchError::ConfigurationError { .. }));
    assert!(error.to_string().contains("sample_interval"));
}

#[test]
fn test_report_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("nope").join("report.json");

    let mut comparison = HashInsertComparison::new(quick_config());
    comparison.run_full_comparison(NoOpReporter::new()).unwrap();

    let error = comparison.export_json_report(&report_path).unwrap_err();
    assert!(matches!(error, BenchError::ReportError { .. }));
}
