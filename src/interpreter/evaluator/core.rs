use std::io::{self, Stdout, Write};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::evaluator::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment and the
/// output channel that `print` writes to.
///
/// ## Usage
///
/// `Context` is created once per program run. [`Context::new`] prints to
/// standard output; [`Context::with_output`] accepts any writer, which is how
/// tests capture printed values.
pub struct Context<W: Write = Stdout> {
    /// Variable bindings of the running program.
    pub environment: Environment,
    output:          W,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty environment that prints
    /// to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context with an empty environment that prints
    /// to `output`.
    pub fn with_output(output: W) -> Self {
        Self { environment: Environment::new(),
               output }
    }

    /// Consumes the context and returns its output channel.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node variant and recurses into children; the recursion depth is
    /// the nesting depth of the tree.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    ///
    /// # Returns
    /// `Some(value)` for nodes that produce a value, or `None` for an `if`
    /// whose condition was false and that has no `else`, a `while` whose body
    /// never ran, and empty programs or blocks.
    ///
    /// # Example
    /// ```
    /// use whilst::{
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse},
    /// };
    ///
    /// let program = parse(&tokenize("x = 4; print x + 3;").unwrap()).unwrap();
    /// let mut context = Context::with_output(Vec::new());
    ///
    /// assert_eq!(context.eval(&program).unwrap(), Some(7.0));
    /// assert_eq!(context.environment.get("x"), Some(4.0));
    /// assert_eq!(String::from_utf8(context.into_output()).unwrap(), "7\n");
    /// ```
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<f64>> {
        match node {
            Node::Program { statements } | Node::Block { statements, .. } => {
                self.eval_sequence(statements)
            },
            Node::Print { expr, line } => self.eval_print(expr, *line).map(Some),
            Node::Assignment { name, expr, line } => {
                self.eval_assignment(name, expr, *line).map(Some)
            },
            Node::If { condition,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Node::While { condition, body, .. } => self.eval_while(condition, body),
            Node::Binary { op,
                           left,
                           right,
                           line, } => self.eval_binary_op(*op, left, right, *line).map(Some),
            Node::Unary { op, expr, .. } => self.eval_unary_op(*op, expr).map(Some),
            Node::Identifier { name, line } => self.eval_identifier(name, *line).map(Some),
            Node::NumberLiteral { value, .. } => Ok(Some(*value)),
        }
    }

    /// Evaluates a node that must produce a number.
    ///
    /// # Errors
    /// `MissingValue` if the node yields no value, in addition to any error
    /// raised while evaluating it.
    pub fn eval_number(&mut self, node: &Node) -> EvalResult<f64> {
        self.eval(node)?
            .ok_or(RuntimeError::MissingValue { line: node.line() })
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// `UnknownVariable` if the name was never assigned; there is no default
    /// value.
    pub fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.environment
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned(),
                                                           line })
    }

    /// Writes a printed value to the output channel on its own line.
    ///
    /// The channel is flushed after every value so output appears in
    /// execution order even when interleaved with other streams.
    pub(crate) fn emit(&mut self, value: f64, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{}", crate::util::num::format_number(value))
            .and_then(|()| self.output.flush())
            .map_err(|source| RuntimeError::Output { source, line })
    }
}
