//! Runner semantics tests.
//!
//! Verifies the evaluate-all contract against a scripted executor: every
//! check runs before the verdict is decided, execution errors count as
//! failures, and an empty check list is a successful no-op.

use crate::mocks::MockExecutor;
use dq_check::{run_checks, CheckSpec, DqError, QueryError, Runner, Value};

#[test]
fn test_empty_check_list_is_noop_success() {
    let mut executor = MockExecutor::new();

    let report = Runner::new(&mut executor).run(&[]);

    assert!(report.verdict().is_ok());
    assert_eq!(report.summary().total, 0);
    assert_eq!(executor.executed_count(), 0);
}

#[test]
fn test_all_passing_checks_execute_exactly_once_each() {
    let mut executor = MockExecutor::new()
        .with_value("SELECT COUNT(*) FROM a", Value::Integer(0))
        .with_value("SELECT COUNT(*) FROM b", Value::Integer(5))
        .with_value("SELECT state FROM c LIMIT 1", Value::Text("done".into()));

    let checks = vec![
        CheckSpec::new("SELECT COUNT(*) FROM a", Value::Integer(0)),
        CheckSpec::new("SELECT COUNT(*) FROM b", Value::Integer(5)),
        CheckSpec::new("SELECT state FROM c LIMIT 1", Value::Text("done".into())),
    ];

    let report = run_checks(&mut executor, &checks).expect("all checks should pass");

    let summary = report.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 3);
    assert_eq!(executor.executed_count(), 3);
}

#[test]
fn test_single_mismatch_fails_run_but_all_checks_execute() {
    let mut executor = MockExecutor::new()
        .with_value("SELECT 1", Value::Integer(1))
        .with_value("SELECT COUNT(*) FROM users", Value::Integer(95))
        .with_value("SELECT 3", Value::Integer(3));

    let checks = vec![
        CheckSpec::new("SELECT 1", Value::Integer(1)),
        CheckSpec::new("SELECT COUNT(*) FROM users", Value::Integer(100)),
        CheckSpec::new("SELECT 3", Value::Integer(3)),
    ];

    let err = run_checks(&mut executor, &checks).unwrap_err();

    // The failing check did not stop the later ones
    assert_eq!(
        executor.executed(),
        &["SELECT 1", "SELECT COUNT(*) FROM users", "SELECT 3"]
    );

    match err {
        DqError::QualityCheckFailure { failures } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].query, "SELECT COUNT(*) FROM users");
            assert_eq!(failures[0].expected, Value::Integer(100));
            assert_eq!(failures[0].actual, Some(Value::Integer(95)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_execution_error_counts_as_failure_not_pass() {
    let mut executor = MockExecutor::new()
        .with_error(
            "SELECT COUNT(*) FROM missing",
            QueryError::Execute {
                message: "no such table: missing".into(),
            },
        )
        .with_value("SELECT 1", Value::Integer(1));

    let checks = vec![
        CheckSpec::new("SELECT COUNT(*) FROM missing", Value::Integer(0)),
        CheckSpec::new("SELECT 1", Value::Integer(1)),
    ];

    let err = run_checks(&mut executor, &checks).unwrap_err();

    // The errored check did not abort the run
    assert_eq!(executor.executed_count(), 2);

    match err {
        DqError::QualityCheckFailure { failures } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].actual, None);
            assert!(failures[0]
                .error
                .as_deref()
                .is_some_and(|m| m.contains("no such table")));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_empty_result_set_is_a_failed_check() {
    let mut executor =
        MockExecutor::new().with_error("SELECT x FROM empty", QueryError::NoRows);

    let checks = vec![CheckSpec::new("SELECT x FROM empty", Value::Integer(0))];

    let report = Runner::new(&mut executor).run(&checks);
    assert!(report.has_failures());
    assert_eq!(report.summary().errored, 1);
}

#[test]
fn test_multiple_failures_all_reported_in_order() {
    let mut executor = MockExecutor::new()
        .with_value("SELECT a", Value::Integer(2))
        .with_value("SELECT b", Value::Integer(1))
        .with_error(
            "SELECT c",
            QueryError::Execute {
                message: "boom".into(),
            },
        );

    let checks = vec![
        CheckSpec::new("SELECT a", Value::Integer(1)),
        CheckSpec::new("SELECT b", Value::Integer(1)),
        CheckSpec::new("SELECT c", Value::Integer(1)),
    ];

    let err = run_checks(&mut executor, &checks).unwrap_err();
    match err {
        DqError::QualityCheckFailure { failures } => {
            assert_eq!(failures.len(), 2);
            assert_eq!(failures[0].query, "SELECT a");
            assert_eq!(failures[1].query, "SELECT c");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_idempotent_verdict_on_unchanged_data() {
    let checks = vec![
        CheckSpec::new("SELECT a", Value::Integer(1)),
        CheckSpec::new("SELECT b", Value::Integer(2)),
    ];

    let script = || {
        MockExecutor::new()
            .with_value("SELECT a", Value::Integer(1))
            .with_value("SELECT b", Value::Integer(99))
    };

    let mut first = script();
    let mut second = script();

    let verdict_one = run_checks(&mut first, &checks).is_err();
    let verdict_two = run_checks(&mut second, &checks).is_err();

    assert!(verdict_one);
    assert_eq!(verdict_one, verdict_two);
    assert_eq!(first.executed(), second.executed());
}

#[test]
fn test_strict_equality_in_runner() {
    // Text "0" does not satisfy an expected integer 0
    let mut executor = MockExecutor::new().with_value("SELECT flag", Value::Text("0".into()));
    let checks = vec![CheckSpec::new("SELECT flag", Value::Integer(0))];

    assert!(run_checks(&mut executor, &checks).is_err());
}
