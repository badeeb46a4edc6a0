use std::io::Write;

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates both operands of a binary node, left before right, and
    /// applies the operator.
    pub fn eval_binary_op(&mut self,
                          op: BinaryOperator,
                          left: &Node,
                          right: &Node,
                          line: usize)
                          -> EvalResult<f64> {
        let left = self.eval_number(left)?;
        let right = self.eval_number(right)?;
        eval_binary(op, left, right, line)
    }
}

/// Evaluates a binary arithmetic operation on two numbers.
///
/// Division by zero is checked explicitly. Any other result that is not a
/// finite number, such as an overflow to infinity, is rejected as well.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `DivisionByZero` for `x / 0`.
/// - `Overflow` if the result is infinite or NaN.
///
/// # Example
/// ```
/// use whilst::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap(), 3.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
/// assert!(eval_binary(BinaryOperator::Mul, f64::MAX, 2.0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    if op == BinaryOperator::Div && right == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let result = op.apply(left, right);
    if !result.is_finite() {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(result)
}
