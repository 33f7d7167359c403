use std::sync::Arc;
use std::thread;

use formula::{evaluate, FormulaEvaluator};
use tests::init_test_logger;

const CASES: &[(&str, Option<f64>)] = &[
    ("2 + 3 * 4", Some(14.0)),
    ("(2 + 3) * 4", Some(20.0)),
    ("10 - 3 - 2", Some(5.0)),
    ("20 / 2 / 5", Some(2.0)),
    ("((10 + 2) * (5 - 4)) / 2", Some(6.0)),
    ("10 / 0", None),
    ("(10 + 5", None),
    ("5 5", None),
];

#[test]
fn test_concurrent_calls_are_independent() {
    init_test_logger();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                for round in 0..200 {
                    let (expression, expected) = CASES[(worker + round) % CASES.len()];
                    let result = evaluate(expression);
                    match expected {
                        Some(value) => assert_eq!(result, Ok(value), "{expression}"),
                        None => assert!(result.is_err(), "{expression}"),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}

#[test]
fn test_shared_evaluator_handle() {
    let evaluator = Arc::new(FormulaEvaluator::new());

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let evaluator = Arc::clone(&evaluator);
            thread::spawn(move || evaluator.evaluate(format!("{n} * {n} + 1").as_str()))
        })
        .collect();

    let results: Vec<f64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker panicked").unwrap())
        .collect();
    assert_eq!(results, vec![2.0, 5.0, 10.0, 17.0]);
}
