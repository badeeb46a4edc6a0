/// Lexing errors.
///
/// Raised when a piece of source text matches none of the token rules.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a syntax
/// tree: missing punctuation, unexpected tokens, an early end of input and
/// literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, division by zero or a failing output channel.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error the interpreter pipeline can report.
///
/// Each phase has its own error type; this enum lets the entry points in the
/// crate root propagate all of them with `?`.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream does not follow the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
