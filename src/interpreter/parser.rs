/// Parser entry points.
///
/// Contains [`parse`](core::parse), which turns a token list into a program,
/// and the expression entry point shared by the other submodules.
pub mod core;

/// Factor parsing.
///
/// Handles literals, identifiers, prefix negation and parenthesized
/// expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels, `+ -` below
/// `* /`.
pub mod binary;

/// Block parsing.
///
/// Parses sequences of statements grouped in braces.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectation helpers shared by the grammar rules.
pub mod utils;

/// Statement parsing.
///
/// Implements `print`, assignment, `if`/`else` and `while`.
pub mod statement;
