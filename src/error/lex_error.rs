#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// No token rule matched the input at this position.
    UnrecognizedInput {
        /// The text that could not be tokenized.
        text:     String,
        /// Byte offset of the text in the source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text, position, line } => write!(f,
                                                                       "Error on line {line}: Unrecognized input '{text}' at position {position}."),
        }
    }
}

impl std::error::Error for LexError {}
