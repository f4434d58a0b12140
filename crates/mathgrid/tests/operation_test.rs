//! Tests for operation evaluation and the once-each pool.

use mathgrid::{evaluate_symbol, Operation, OperationPool};

#[test]
fn test_add() {
    assert_eq!(Operation::Add.evaluate(5.0, 3.0), 8.0);
    assert_eq!(Operation::Add.evaluate(10.0, 7.0), 17.0);
}

#[test]
fn test_subtract_is_order_dependent() {
    assert_eq!(Operation::Subtract.evaluate(5.0, 3.0), 2.0);
    assert_eq!(Operation::Subtract.evaluate(7.0, 10.0), -3.0);
}

#[test]
fn test_multiply() {
    assert_eq!(Operation::Multiply.evaluate(5.0, 3.0), 15.0);
    assert_eq!(Operation::Multiply.evaluate(7.0, 10.0), 70.0);
}

#[test]
fn test_divide() {
    assert_eq!(Operation::Divide.evaluate(6.0, 3.0), 2.0);
    assert_eq!(Operation::Divide.evaluate(10.0, 4.0), 2.5);
}

#[test]
fn test_unknown_symbol_evaluates_to_zero() {
    assert_eq!(evaluate_symbol(5.0, 3.0, "%"), 0.0);
    assert_eq!(evaluate_symbol(5.0, 3.0, ""), 0.0);
}

#[test]
fn test_known_symbols_evaluate() {
    assert_eq!(evaluate_symbol(5.0, 3.0, "+"), 8.0);
    assert_eq!(evaluate_symbol(5.0, 3.0, "-"), 2.0);
    assert_eq!(evaluate_symbol(5.0, 3.0, "×"), 15.0);
    assert_eq!(evaluate_symbol(6.0, 3.0, "÷"), 2.0);
}

#[test]
fn test_symbol_round_trip() {
    for op in Operation::ALL {
        assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operation::from_symbol("?"), None);
}

#[test]
fn test_pool_starts_full() {
    let pool = OperationPool::new();
    assert!(!pool.is_empty());
    assert_eq!(pool.remaining().len(), 4);
    for op in Operation::ALL {
        assert!(pool.contains(op));
    }
}
