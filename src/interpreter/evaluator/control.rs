use std::io::Write;

use crate::{
    ast::Node,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Maps a number to a condition result: zero is false, everything else,
/// including negative numbers, is true.
///
/// # Example
/// ```
/// use whilst::interpreter::evaluator::control::is_truthy;
///
/// assert!(is_truthy(1.0));
/// assert!(is_truthy(-0.5));
/// assert!(!is_truthy(0.0));
/// assert!(!is_truthy(-0.0));
/// ```
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

impl<W: Write> Context<W> {
    /// Evaluates an `if` statement.
    ///
    /// # Parameters
    /// - `condition`: The condition expression.
    /// - `then_branch`: Statement run when the condition is truthy.
    /// - `else_branch`: Optional statement run otherwise.
    ///
    /// # Returns
    /// The value of the branch that ran, or `None` when the condition is
    /// falsy and there is no `else`.
    pub fn eval_if(&mut self,
                   condition: &Node,
                   then_branch: &Node,
                   else_branch: Option<&Node>)
                   -> EvalResult<Option<f64>> {
        let cond = self.eval_number(condition)?;

        let result = if is_truthy(cond) {
            self.eval(then_branch)?
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)?
        } else {
            None
        };

        Ok(result)
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration. There is no
    /// iteration limit: a condition that never becomes zero loops forever.
    ///
    /// # Returns
    /// The value of the last body execution, or `None` if the body never ran.
    pub fn eval_while(&mut self, condition: &Node, body: &Node) -> EvalResult<Option<f64>> {
        let mut result = None;
        let mut iterations: u64 = 0;

        while is_truthy(self.eval_number(condition)?) {
            result = self.eval(body)?;
            iterations += 1;
        }

        log::trace!("line {}: loop finished after {iterations} iterations",
                    condition.line());
        Ok(result)
    }
}
