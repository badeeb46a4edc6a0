use std::io::Write;

use crate::{
    ast::Node,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates a sequence of statements.
    ///
    /// Used for both the program root and blocks. Each statement is evaluated
    /// in order and the value of the last one is returned, or `None` if the
    /// sequence is empty. Blocks open no scope.
    ///
    /// # Parameters
    /// - `statements`: Statements in source order.
    ///
    /// # Returns
    /// The last evaluated value or `None`.
    pub fn eval_sequence(&mut self, statements: &[Node]) -> EvalResult<Option<f64>> {
        let mut last = None;

        for statement in statements {
            log::trace!("line {}: executing statement", statement.line());
            last = self.eval(statement)?;
        }

        Ok(last)
    }

    /// Evaluates a print statement.
    ///
    /// The value is written to the output channel and also returned, so a
    /// print can be the final value of a program.
    pub fn eval_print(&mut self, expr: &Node, line: usize) -> EvalResult<f64> {
        let value = self.eval_number(expr)?;
        self.emit(value, line)?;
        Ok(value)
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated before the binding is written, so
    /// `x = x - 1;` reads the old value. Any previous binding is overwritten.
    ///
    /// # Returns
    /// The assigned value.
    pub fn eval_assignment(&mut self, name: &str, expr: &Node, line: usize) -> EvalResult<f64> {
        let value = self.eval_number(expr)?;
        self.environment.assign(name, value);
        log::debug!("line {line}: {name} = {value}");
        Ok(value)
    }
}
