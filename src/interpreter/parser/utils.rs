use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Consumes the next token if it equals `expected`.
///
/// This is the only way the parser moves past punctuation and keywords, so
/// every grammar rule that requires a fixed token goes through here.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The token that must come next.
/// - `description`: How the token is named in error messages, e.g. `"';'"`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// - `ExpectedToken` if a different token is next.
/// - `UnexpectedEndOfInput` if there are no tokens left.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &'static str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: description,
                                                             found:    tok.to_string(),
                                                             line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: description,
                                                       line:     0, }),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: "identifier",
                                                             found:    tok.to_string(),
                                                             line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "identifier",
                                                       line:     0, }),
    }
}

/// Enters one more level of nesting.
///
/// Every grammar rule that recurses into a nested statement or factor calls
/// this first, which bounds the recursion of both the parser and the
/// evaluator that later walks the tree.
///
/// # Returns
/// The depth to pass to the nested rule.
///
/// # Errors
/// `NestingTooDeep` once the depth would exceed
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
pub(in crate::interpreter::parser) fn descend(depth: usize, line: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { line });
    }
    Ok(depth + 1)
}
