#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic result is not a finite number.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement that yields no value was used where a number is needed.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output channel failed.
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Arithmetic result is not a finite number."),
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::Output { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}
