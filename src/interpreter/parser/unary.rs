use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{descend, expect_token},
        },
    },
    util::num::i64_to_f64_checked,
};

/// Parses a factor, the tightest-binding level of the expression grammar.
///
/// A leading `-` is a prefix negation applied to another factor, so it binds
/// tighter than every binary operator: `-2-2` is `(-2) - 2`.
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | IDENTIFIER
///             | "-" factor
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed [`Node`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedToken` for a token that cannot start a factor.
/// - `UnexpectedEndOfInput` if no tokens are left.
/// - `ExpectedToken` if a parenthesized expression is not closed.
/// - `NestingTooDeep` for too many nested negations or parentheses.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "an expression",
                                                      line:     0, });
    };
    let line = *line;

    match token {
        Token::Integer(n) => {
            let value = i64_to_f64_checked(*n, ParseError::LiteralTooLarge { line })?;
            Ok(Node::NumberLiteral { value, line })
        },
        Token::Real(value) => Ok(Node::NumberLiteral { value: *value,
                                                       line }),
        Token::Identifier(name) => Ok(Node::Identifier { name: name.clone(),
                                                         line }),
        Token::Minus => {
            let expr = parse_factor(tokens, descend(depth, line)?)?;
            Ok(Node::Unary { op: UnaryOperator::Negate,
                             expr: Box::new(expr),
                             line })
        },
        Token::LParen => parse_grouping(tokens, descend(depth, line)?),
        tok => Err(ParseError::UnexpectedToken { context: "factor",
                                                 token: tok.to_string(),
                                                 line }),
    }
}

/// Parses a parenthesized expression after its opening `(`.
///
/// Grouping produces no node of its own; the inner expression is returned.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(expr)
}
