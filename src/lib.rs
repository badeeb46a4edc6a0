//! # whilst
//!
//! whilst is a tiny imperative language and its tree-walking interpreter.
//! Programs work on numbers only and consist of assignments, `print`,
//! `if`/`else`, `while` and blocks. Source text goes through three phases:
//! the lexer turns it into tokens, the parser builds a syntax tree, and the
//! evaluator runs the tree against a single global variable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator enums that represent
/// the syntactic structure of a program as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed node type for all statements and expressions.
/// - Attaches source lines to nodes for error reporting.
/// - Defines what each arithmetic operator computes.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error aborts the run and carries the source line it was detected on.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, evaluator).
/// - Combines them into [`Error`](error::Error) for the pipeline entry points.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation to provide a
/// complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
pub mod util;

/// Lexes and parses source text into a [`Node::Program`].
///
/// # Errors
/// Returns a lexing or parsing error.
///
/// # Example
/// ```
/// use whilst::{ast::Node, parse_source};
///
/// let program = parse_source("if (1) x = 2; else x = 3;").unwrap();
/// assert!(matches!(program, Node::Program { .. }));
///
/// assert!(parse_source("print 1 2;").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Runs a program and writes everything it prints to `output`.
///
/// A fresh environment is created for the run and dropped afterwards.
///
/// # Returns
/// The value of the last executed top-level statement, or `None` if there is
/// none (an empty program, or one ending in a skipped `if` or a `while` whose
/// body never ran).
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error. Output printed before
/// a runtime error has already been written.
///
/// # Example
/// ```
/// use whilst::run;
///
/// let mut output = Vec::new();
/// let result = run("x = 4; print x + 3;", &mut output).unwrap();
///
/// assert_eq!(result, Some(7.0));
/// assert_eq!(String::from_utf8(output).unwrap(), "7\n");
/// ```
pub fn run<W: Write>(source: &str, output: W) -> Result<Option<f64>, Error> {
    let program = parse_source(source)?;
    let mut context = Context::with_output(output);
    Ok(context.eval(&program)?)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string, printing to standard output. If `auto_print` is set, the final
/// value of the program is printed as well.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use whilst::get_result;
///
/// // Simple program: the result will be calculated and no error should occur.
/// let res = get_result("result = 2 + 2;", false);
/// assert_eq!(res.unwrap(), Some(4.0));
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("y = x + 1;", false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<f64>, Error> {
    let result = run(source, std::io::stdout())?;

    if auto_print && let Some(v) = result {
        println!("{}", util::num::format_number(v));
    }

    Ok(result)
}
