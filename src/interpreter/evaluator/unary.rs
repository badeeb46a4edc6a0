use std::io::Write;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// Only negation exists; it cannot fail on a finite operand.
    pub fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Node) -> EvalResult<f64> {
        let value = self.eval_number(expr)?;
        Ok(op.apply(value))
    }
}
