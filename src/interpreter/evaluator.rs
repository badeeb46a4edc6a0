/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context that owns the
/// environment and the output channel, and error propagation.
pub mod core;

/// The variable store.
///
/// One flat name to number mapping shared by the whole program.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Arithmetic on two numbers, including the division by zero and overflow
/// checks.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Statement evaluation.
///
/// Statement sequences, `print` and assignment.
pub mod statement;

/// Control flow evaluation.
///
/// `if`/`else`, `while` and the truthiness rule they share.
pub mod control;
