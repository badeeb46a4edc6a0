#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token was required but a different one was found.
    ExpectedToken {
        /// The token the grammar requires, e.g. `';'`.
        expected: &'static str,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start the construct being parsed.
    UnexpectedToken {
        /// What was being parsed, e.g. `statement` or `factor`.
        context: &'static str,
        /// The token encountered.
        token:   String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser still needed.
        expected: &'static str,
        /// The line of the last token read.
        line:     usize,
    },
    /// An integer literal cannot be represented exactly as a number.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Statements or expressions are nested deeper than the parser allows.
    NestingTooDeep {
        /// The source line where the limit was exceeded.
        line: usize,
    },
}

impl ParseError {
    /// Fills in the line of an `UnexpectedEndOfInput` error.
    ///
    /// The parser only notices the end of input when it runs out of tokens,
    /// at which point the line of the last token is no longer at hand.
    #[must_use]
    pub fn at_end_of_input(self, last_line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { expected, .. } => {
                Self::UnexpectedEndOfInput { expected,
                                             line: last_line }
            },
            other => other,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },

            Self::UnexpectedToken { context, token, line } => {
                write!(f, "Error on line {line}: Unexpected token in {context}: {token}.")
            },

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input, expected {expected}."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },

            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Nesting is too deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
