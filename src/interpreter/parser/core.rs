use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply blocks, control flow bodies, negations and parentheses may
/// nest inside each other.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a whole token list into a [`Node::Program`].
///
/// This is the entry point of the parser. Statements are parsed one after
/// another until the tokens are exhausted; there is no separator between
/// top-level statements other than the `;` or `}` that ends each of them.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no recovery is attempted. An
/// early end of input is reported on the line of the last token. Nesting
/// beyond [`MAX_NESTING_DEPTH`] is reported as `NestingTooDeep`.
///
/// # Example
/// ```
/// use whilst::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("print 1; x = 2;").unwrap();
/// let Node::Program { statements } = parse(&tokens).unwrap() else {
///     panic!("parse always returns a program");
/// };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Node> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter, 0).map_err(|e| e.at_end_of_input(last_line))?;
        statements.push(statement);
    }

    log::trace!("parsed {} top-level statements", statements.len());
    Ok(Node::Program { statements })
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}
