/// Binary arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// No checks are made here; division by zero and overflow are detected
    /// by the evaluator.
    ///
    /// # Example
    /// ```
    /// use whilst::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(BinaryOperator::Div.apply(9.0, 3.0), 3.0);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// Prefix operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, `-x`.
    Negate,
}

impl UnaryOperator {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
        }
    }
}

/// An abstract syntax tree (AST) node.
///
/// The tree is closed: the parser only ever builds these variants and the
/// evaluator matches on all of them. Statements (`Print`, `Assignment`, `If`,
/// `While`, `Block`) and expressions share one type because every statement
/// also produces a value.
///
/// All variants except `Program` remember the source line of their first
/// token for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The root of a parsed source file.
    Program {
        /// Top-level statements in source order.
        statements: Vec<Self>,
    },
    /// `{ statement* }`
    Block {
        /// Statements in source order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `print expression ;`
    Print {
        /// The printed expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = expression ;`
    Assignment {
        /// Name of the variable being written.
        name: String,
        /// The assigned expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `if ( condition ) statement [else statement]`
    If {
        /// The condition; nonzero is true.
        condition:   Box<Self>,
        /// Statement run when the condition is true.
        then_branch: Box<Self>,
        /// Statement run when the condition is false, if any.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while ( condition ) statement`
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A binary arithmetic operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A numeric constant. Integer literals are stored as `f64` too.
    NumberLiteral {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Node {
    /// Returns the source line the node starts on.
    ///
    /// A `Program` reports the line of its first statement, or `1` when it
    /// is empty.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Program { statements } => statements.first().map_or(1, Self::line),
            Self::Block { line, .. }
            | Self::Print { line, .. }
            | Self::Assignment { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Identifier { line, .. }
            | Self::NumberLiteral { line, .. } => *line,
        }
    }
}
