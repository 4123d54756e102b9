use crate::expression::{Expression, ExpressionError, Op};

fn num(value: f64) -> Expression {
    Expression::Number(value)
}

#[test]
fn test_evaluate_basic_operators() {
    assert_eq!(
        Expression::binary(Op::Add, num(2.0), num(3.0)).evaluate(),
        Ok(5.0)
    );
    assert_eq!(
        Expression::binary(Op::Sub, num(2.0), num(3.0)).evaluate(),
        Ok(-1.0)
    );
    assert_eq!(
        Expression::binary(Op::Mul, num(2.0), num(3.0)).evaluate(),
        Ok(6.0)
    );
    assert_eq!(
        Expression::binary(Op::Div, num(3.0), num(2.0)).evaluate(),
        Ok(1.5)
    );
}

#[test]
fn test_evaluate_nested_tree() {
    // (1 + 2) * 3 - 4
    let expr = Expression::binary(
        Op::Sub,
        Expression::binary(
            Op::Mul,
            Expression::binary(Op::Add, num(1.0), num(2.0)),
            num(3.0),
        ),
        num(4.0),
    );
    assert_eq!(expr.evaluate(), Ok(5.0));
}

#[test]
fn test_division_by_zero_is_an_error() {
    let expr = Expression::binary(Op::Div, num(1.0), num(0.0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_division_by_computed_zero_is_an_error() {
    let zero = Expression::binary(Op::Sub, num(2.0), num(2.0));
    let expr = Expression::binary(Op::Div, num(5.0), zero);
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_failure_inside_a_subtree_propagates() {
    let inner = Expression::binary(Op::Div, num(1.0), num(0.0));
    let expr = Expression::binary(Op::Add, num(1.0), inner);
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_non_finite_results_are_errors() {
    let expr = Expression::binary(Op::Mul, num(f64::MAX), num(2.0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NonFinite));

    let expr = Expression::binary(Op::Div, num(f64::MAX), num(0.5));
    assert_eq!(expr.evaluate(), Err(ExpressionError::NonFinite));
}

#[test]
fn test_display_keeps_flat_precedence_unparenthesized() {
    let product = Expression::binary(Op::Mul, num(2.0), num(3.0));
    let expr = Expression::binary(Op::Add, num(1.0), product);
    assert_eq!(expr.to_string(), "1 + 2 * 3");

    let sum = Expression::binary(Op::Add, num(1.0), num(2.0));
    let expr = Expression::binary(Op::Sub, sum, num(3.0));
    assert_eq!(expr.to_string(), "1 + 2 - 3");

    let quotient = Expression::binary(Op::Div, num(8.0), num(2.0));
    let expr = Expression::binary(Op::Div, quotient, num(4.0));
    assert_eq!(expr.to_string(), "8 / 2 / 4");
}

#[test]
fn test_display_parenthesizes_grouped_operands() {
    let sum = Expression::binary(Op::Add, num(1.0), num(2.0));
    let expr = Expression::binary(Op::Mul, sum, num(3.0));
    assert_eq!(expr.to_string(), "(1 + 2) * 3");

    let difference = Expression::binary(Op::Sub, num(2.0), num(3.0));
    let expr = Expression::binary(Op::Sub, num(1.0), difference);
    assert_eq!(expr.to_string(), "1 - (2 - 3)");

    let product = Expression::binary(Op::Mul, num(2.0), num(3.0));
    let expr = Expression::binary(Op::Div, num(6.0), product);
    assert_eq!(expr.to_string(), "6 / (2 * 3)");

    let quotient = Expression::binary(Op::Div, num(3.0), num(2.0));
    let expr = Expression::binary(Op::Div, num(6.0), quotient);
    assert_eq!(expr.to_string(), "6 / (3 / 2)");
}

#[test]
fn test_display_renders_whole_numbers_without_decimals() {
    assert_eq!(num(905.0).to_string(), "905");
    assert_eq!(num(0.0).to_string(), "0");
    assert_eq!(
        Expression::binary(Op::Div, num(1.0), num(2.0)).to_string(),
        "1 / 2"
    );
}

#[test]
fn test_rendered_text_reparses_to_the_same_value() {
    // Right-leaning additions drop their parentheses; a reparse groups
    // them left but the value is unchanged.
    let sum = Expression::binary(Op::Add, num(2.0), num(3.0));
    let expr = Expression::binary(Op::Add, num(1.0), sum);
    assert_eq!(expr.to_string(), "1 + 2 + 3");
    assert_eq!(expr.evaluate(), Ok(6.0));
}
